//! Interactive collection of bodies, missions and factor ratings.
//!
//! Every question is re-asked until the answer is valid, so callers always
//! receive values that satisfy the core's invariants.

use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use std::str::FromStr;

use crate::catalog::BodyProfile;
use crate::factors::{Factor, FactorSet};
use crate::population::MissionParameters;

pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl Prompter<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Prompter reading from stdin and writing to stdout
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write prompt")
    }

    fn heading(&mut self, title: &str) -> Result<()> {
        let rule = "=".repeat(50);
        self.say("")?;
        self.say(&rule)?;
        self.say(title)?;
        self.say(&rule)?;
        self.say("")
    }

    /// Prompt user with a message and return their trimmed input.
    fn prompt(&mut self, message: &str) -> Result<String> {
        write!(self.output, "{}", message).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush stdout")?;
        let mut input = String::new();
        let read = self
            .input
            .read_line(&mut input)
            .context("Failed to read input")?;
        if read == 0 {
            anyhow::bail!("Input ended before all questions were answered");
        }
        Ok(input.trim().to_string())
    }

    /// Re-prompt until the answer parses and passes `accept`.
    fn prompt_parsed<T, F>(&mut self, message: &str, invalid: &str, accept: F) -> Result<T>
    where
        T: FromStr,
        F: Fn(&T) -> bool,
    {
        loop {
            let answer = self.prompt(message)?;
            match answer.parse::<T>() {
                Ok(value) if accept(&value) => return Ok(value),
                _ => self.say(&format!("  Invalid: {}. Try again.", invalid))?,
            }
        }
    }

    /// Prompt user with a yes/no question.
    fn prompt_yes_no(&mut self, message: &str) -> Result<bool> {
        let input = self.prompt(&format!("{} [y/N]: ", message))?.to_lowercase();
        Ok(input == "y" || input == "yes")
    }

    fn prompt_non_negative(&mut self, message: &str) -> Result<f64> {
        self.prompt_parsed(message, "must be a non-negative number", |v: &f64| {
            v.is_finite() && *v >= 0.0
        })
    }

    fn prompt_factors(&mut self, integral: bool) -> Result<FactorSet> {
        let mut pairs = Vec::with_capacity(Factor::COUNT);
        for factor in Factor::ALL {
            let message = format!("{}: ", factor.label());
            let value = if integral {
                let v: u8 = self.prompt_parsed(&message, "enter a whole number between 0 and 100", |v: &u8| *v <= 100)?;
                f64::from(v)
            } else {
                self.prompt_parsed(&message, "enter a number between 0 and 100", |v: &f64| {
                    (0.0..=100.0).contains(v)
                })?
            };
            pairs.push((factor, value));
        }
        Ok(FactorSet::from_pairs(pairs)?)
    }

    /// Ask for every field of a user-defined body.
    pub fn custom_body(&mut self) -> Result<BodyProfile> {
        self.heading("CREATE CUSTOM BODY")?;

        let name = loop {
            let name = self.prompt("Body name: ")?;
            if !name.is_empty() {
                break name;
            }
            self.say("  Invalid: name must not be empty. Try again.")?;
        };

        self.say("\nAstronomical data:")?;
        let distance_au = self.prompt_non_negative("Distance from Earth (AU): ")?;
        let travel_time_years = self.prompt_non_negative("Estimated travel time (years): ")?;
        let star_distance_au = self.prompt_non_negative("Distance from its star (AU): ")?;
        let habitable_zone = self.prompt_yes_no("Is it in the habitable zone?")?;

        self.say("\nSurvival factors (0-100):")?;
        let factors = self.prompt_factors(true)?;

        let body = BodyProfile {
            name,
            distance_au,
            travel_time_years,
            star_distance_au,
            habitable_zone,
            factors,
        };
        body.validate()?;
        Ok(body)
    }

    /// Ask for the mission parameters, starting over until all four are valid.
    pub fn mission(&mut self) -> Result<MissionParameters> {
        self.heading("COLONIZATION MISSION PARAMETERS")?;

        loop {
            let males = self.prompt_parsed("Number of male colonists: ", "enter a whole number", |_: &i64| true)?;
            let females = self.prompt_parsed("Number of female colonists: ", "enter a whole number", |_: &i64| true)?;
            let embryos = self.prompt_parsed("Number of frozen embryos: ", "enter a whole number", |_: &i64| true)?;
            let years = self.prompt_parsed("Planned mission duration (years): ", "enter a number", |v: &f64| {
                !v.is_nan()
            })?;

            let counts = (u32::try_from(males), u32::try_from(females), u32::try_from(embryos));
            if let (Ok(males), Ok(females), Ok(embryos)) = counts {
                if let Ok(mission) = MissionParameters::new(males, females, embryos, years) {
                    return Ok(mission);
                }
            }
            self.say("All values must be positive!")?;
        }
    }

    /// Ask for present-day ratings of Earth for the survival estimate.
    pub fn survival_factors(&mut self) -> Result<FactorSet> {
        self.say("Enter the current value of each factor (0-100):")?;
        self.prompt_factors(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn prompter(script: &str) -> Prompter<Cursor<Vec<u8>>, Vec<u8>> {
        Prompter::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
    }

    fn factor_lines(value: &str) -> String {
        format!("{}\n", value).repeat(Factor::COUNT)
    }

    #[test]
    fn test_mission_accepts_valid_input() {
        let mut p = prompter("3\n4\n10\n12.5\n");
        let mission = p.mission().unwrap();
        assert_eq!(mission, MissionParameters::new(3, 4, 10, 12.5).unwrap());
    }

    #[test]
    fn test_mission_reprompts_on_negative_values() {
        let mut p = prompter("-1\n2\n0\n5\n1\n2\n0\n5\n");
        let mission = p.mission().unwrap();
        assert_eq!(mission.males, 1);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("All values must be positive!"));
    }

    #[test]
    fn test_mission_reprompts_on_zero_duration() {
        let mut p = prompter("1\n1\n0\n0\n1\n1\n0\n2\n");
        let mission = p.mission().unwrap();
        assert_eq!(mission.duration_years, 2.0);
    }

    #[test]
    fn test_mission_reprompts_on_garbage() {
        let mut p = prompter("two\n2\n2\n0\n3\n");
        let mission = p.mission().unwrap();
        assert_eq!(mission.males, 2);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("Invalid: enter a whole number"));
    }

    #[test]
    fn test_custom_body() {
        let script = format!("Nova\n4.2\n15\n0.8\nn\n{}", factor_lines("55"));
        let mut p = prompter(&script);
        let body = p.custom_body().unwrap();
        assert_eq!(body.name, "Nova");
        assert_eq!(body.distance_au, 4.2);
        assert!(!body.habitable_zone);
        assert_eq!(body.factors.get(Factor::SoilQuality), 55.0);
    }

    #[test]
    fn test_custom_body_reprompts_out_of_range_factor() {
        let script = format!("Nova\n1\n1\n1\ny\n150\n{}", factor_lines("10"));
        let mut p = prompter(&script);
        let body = p.custom_body().unwrap();
        assert!(body.habitable_zone);
        assert_eq!(body.factors.get(Factor::ClimateStability), 10.0);
        let transcript = String::from_utf8(p.output).unwrap();
        assert!(transcript.contains("between 0 and 100"));
    }

    #[test]
    fn test_custom_body_rejects_fractional_factor() {
        let script = format!("Nova\n1\n1\n1\nn\n12.5\n{}", factor_lines("12"));
        let mut p = prompter(&script);
        let body = p.custom_body().unwrap();
        assert_eq!(body.factors.get(Factor::ClimateStability), 12.0);
    }

    #[test]
    fn test_survival_factors_accept_decimals() {
        let mut p = prompter(&factor_lines("62.5"));
        let factors = p.survival_factors().unwrap();
        assert_eq!(factors.get(Factor::OzoneLayer), 62.5);
    }

    #[test]
    fn test_end_of_input_is_error() {
        let mut p = prompter("1\n1\n");
        assert!(p.mission().is_err());
    }
}
