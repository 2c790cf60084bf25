use civtime::{CivilComponents, CivilTime};
use qtty::Seconds;

fn main() -> Result<(), civtime::TimeError> {
    let now = CivilTime::now()?;
    let utc = now.to_utc()?;
    let tomorrow = now.checked_add(Seconds::new(86_400.0))?;
    let y2k = CivilTime::from_civil(CivilComponents::year(2000.0))?;

    println!("local:    {now}");
    println!("utc:      {utc}");
    println!("tomorrow: {tomorrow}");
    println!("y2k:      {y2k} ({} s since the epoch)", y2k.to_i());
    println!("dst:      {}", now.is_dst());
    Ok(())
}
