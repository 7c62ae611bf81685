/// Year policy tables: debris spawn cadence and banner captions.

use crate::compute::ticks;
use crate::config::SPAWN_DELAY_UNIT;

/// Spawn delay for `year` in units of `SPAWN_DELAY_UNIT`.  `None` means no
/// debris is launched that year.
pub fn garbage_delay(year: u32) -> Option<u32> {
    match year {
        0..=1960 => None,
        1961..=1968 => Some(20),
        1969..=1980 => Some(14),
        1981..=1994 => Some(10),
        1995..=2009 => Some(8),
        2010..=2019 => Some(6),
        _ => Some(2),
    }
}

/// Spawn delay for `year` converted to scheduler ticks.
pub fn spawn_delay_ticks(year: u32) -> Option<u64> {
    garbage_delay(year).map(|units| ticks(SPAWN_DELAY_UNIT * units))
}

pub fn caption_for(year: u32) -> Option<&'static str> {
    match year {
        1957 => Some("First Sputnik"),
        1961 => Some("Gagarin flew!"),
        1969 => Some("Armstrong got on the moon!"),
        1971 => Some("First orbital space station Salute-1"),
        1981 => Some("Flight of the Shuttle Columbia"),
        1998 => Some("ISS start building"),
        2011 => Some("Messenger launch to Mercury"),
        2020 => Some("Take the plasma gun! Shoot the garbage!"),
        _ => None,
    }
}

/// Banner text shown by the scenario clock.
pub fn banner_for(year: u32) -> String {
    match caption_for(year) {
        Some(caption) => format!("{year} {caption}"),
        None => year.to_string(),
    }
}
