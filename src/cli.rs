use clap::{ArgAction, Parser};
use crisp8::Quirks;

use crate::pacer::MAX_SPEED;

/// Longest supported run, one day
const MAX_SECONDS: f64 = 86_400.0;

/// Run a CHIP-8 program headless in real time and print its final frame
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(version, about, long_about = None)]
pub struct Options {
    /// Path to the ROM file to run
    pub rom: String,

    #[arg(long, default_value_t = 3.0, value_parser = parse_seconds, help = "Wall-clock run time in seconds")]
    pub seconds: f64,

    #[arg(long, default_value_t = 1.0, value_parser = parse_speed, help = "Simulation speed factor")]
    pub speed: f64,

    #[arg(long, action = ArgAction::SetTrue, help = "8XY6/8XYE shift VY into VX")]
    pub shift_vy: bool,

    #[arg(long, action = ArgAction::SetTrue, help = "BNNN jumps to NNN + VX")]
    pub jump_vx: bool,

    #[arg(long, action = ArgAction::SetTrue, help = "FX55/FX65 advance I")]
    pub index_increment: bool,

    #[arg(long, action = ArgAction::SetTrue, help = "Wrap sprites around screen edges instead of clipping")]
    pub wrap: bool,

    #[arg(long, action = ArgAction::SetTrue, help = "Use the alternate keypad layout")]
    pub alternate_keypad: bool,
}

impl Options {
    pub fn quirks(&self) -> Quirks {
        Quirks {
            shift_source_vy: self.shift_vy,
            jump_offset_vx: self.jump_vx,
            index_increment: self.index_increment,
            clipping: !self.wrap,
            alternate_keypad: self.alternate_keypad,
        }
    }
}

fn parse_bounded(value: &str, min: f64, max: f64, inclusive_min: bool) -> Result<f64, String> {
    let v: f64 = value.parse().map_err(|_| format!("`{}` is not a number", value))?;
    let above_min = if inclusive_min { v >= min } else { v > min };
    if !v.is_finite() || !above_min || v > max {
        return Err(format!("`{}` is outside {}..={}", value, min, max));
    }
    Ok(v)
}

fn parse_seconds(value: &str) -> Result<f64, String> {
    parse_bounded(value, 0.0, MAX_SECONDS, true)
}

fn parse_speed(value: &str) -> Result<f64, String> {
    parse_bounded(value, 0.0, MAX_SPEED, false)
}
