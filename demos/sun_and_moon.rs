use almanac::almanac_errors::AlmanacError;
use almanac::bodies::{moon::Moon, sun::Sun, Body, Twilight};
use almanac::observers::Observer;
use almanac::time::{date_to_millis, millis_to_epoch};

fn main() -> Result<(), AlmanacError> {
    let time = date_to_millis("2024-06-21T12:00:00")?;
    let site = Observer::new(51.5, -0.13).with_name("London");

    let sun = Body::new(Sun, time)?;
    let moon = Body::new(Moon, time)?;

    println!("{site} at {}", millis_to_epoch(time));
    println!();

    println!("Sun");
    println!("  RA {:.4} h, Dec {:.4}°", sun.right_ascension(), sun.declination());
    println!("  {}", site.horizontal(&sun));
    println!("  astronomical dawn  {}", sun.dawn_at(site.latitude, site.longitude, Twilight::Astronomical)?);
    println!("  civil dawn         {}", sun.dawn(site.latitude, site.longitude)?);
    println!("  rise               {}", site.rise(&sun)?);
    println!("  transit            {}", millis_to_epoch(site.transit(&sun)));
    println!("  set                {}", site.set(&sun)?);
    println!("  civil dusk         {}", sun.dusk(site.latitude, site.longitude)?);
    println!();

    println!("Moon");
    println!("  distance {:.0} km", moon.distance() * almanac::constants::AU);
    println!("  RA {:.4} h, Dec {:.4}°", moon.right_ascension(), moon.declination());
    println!("  {}", site.horizontal(&moon));
    println!("  rise               {}", site.rise(&moon)?);
    println!("  transit            {}", millis_to_epoch(site.transit(&moon)));
    println!("  set                {}", site.set(&moon)?);

    Ok(())
}
