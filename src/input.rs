use chrono::{Local, NaiveDateTime, TimeZone};
use lazy_regex::regex_is_match;
use std::io::{BufRead, Write};

use crate::{
    entities::Itinerary,
    error::{invalid_input_error, Error},
};

const DATE_FORMAT: &str = "%Y/%m/%d %H:%M";

const MSG_INVALID_INPUT: &str = "Invalid input. Please try again.";
const MSG_INVALID_TIME: &str = "The departure time is invalid. Please try again.";
const MSG_UNPARSEABLE_TIME: &str = "The departure time is not a valid date. Please try again.";
const MSG_INVALID_CHOICE: &str = "Please answer with Y or N.";

/// Interactive collector for the four itinerary fields. Each field is asked
/// for in a fixed order and re-asked until its input validates; the record is
/// only returned fully populated.
pub struct Collector<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Collector<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn collect(&mut self) -> Result<Itinerary, Error> {
        let origin = self.ask("Enter the starting point", parse_origin)?;
        let waypoints = self.ask(
            "Enter the destinations (multiple allowed, space separated)",
            parse_waypoints,
        )?;
        let departure_time = self.ask(
            "Enter the departure time (yyyy/mm/dd hh:mm or now)",
            parse_departure_time,
        )?;
        let include_tolls = self.ask(
            "Include toll and highway roads? (Y/N)",
            parse_toll_preference,
        )?;

        Ok(Itinerary {
            origin,
            waypoints,
            departure_time,
            avoid_tolls: !include_tolls,
        })
    }

    fn ask<T>(
        &mut self,
        prompt: &str,
        parse: impl Fn(&str) -> Result<T, &'static str>,
    ) -> Result<T, Error> {
        loop {
            writeln!(self.output, "{}", prompt)?;
            self.output.flush()?;

            let mut line = String::new();

            if self.input.read_line(&mut line)? == 0 {
                // input closed before the field validated
                return Err(invalid_input_error());
            }

            let raw = line.trim_end_matches(['\r', '\n']);

            match parse(raw) {
                Ok(value) => return Ok(value),
                Err(message) => writeln!(self.output, "{}", message)?,
            }
        }
    }
}

fn parse_origin(raw: &str) -> Result<String, &'static str> {
    if raw.trim().is_empty() {
        return Err(MSG_INVALID_INPUT);
    }

    Ok(raw.to_owned())
}

fn parse_waypoints(raw: &str) -> Result<Vec<String>, &'static str> {
    if raw.trim().is_empty() {
        return Err(MSG_INVALID_INPUT);
    }

    let waypoints: Vec<String> = drop_delimiters(raw)
        .split_whitespace()
        .map(str::to_owned)
        .collect();

    if waypoints.is_empty() {
        return Err(MSG_INVALID_INPUT);
    }

    Ok(waypoints)
}

/// Normalizes the full-width and half-width comma to a plain space so the
/// waypoint list splits the same way regardless of input locale.
fn drop_delimiters(raw: &str) -> String {
    raw.replace('、', " ").replace(',', " ")
}

fn parse_departure_time(raw: &str) -> Result<i64, &'static str> {
    if raw.trim().is_empty() {
        return Err(MSG_INVALID_INPUT);
    }

    if raw == "now" {
        return Ok(Local::now().timestamp());
    }

    if !regex_is_match!(r"^\d{4}/\d{2}/\d{2} \d{2}:\d{2}$", raw) {
        return Err(MSG_INVALID_TIME);
    }

    // shape is right, but the date itself may still be nonsense (month 13)
    let naive =
        NaiveDateTime::parse_from_str(raw, DATE_FORMAT).map_err(|_| MSG_UNPARSEABLE_TIME)?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|moment| moment.timestamp())
        .ok_or(MSG_UNPARSEABLE_TIME)
}

fn parse_toll_preference(raw: &str) -> Result<bool, &'static str> {
    match raw {
        "Y" => Ok(true),
        "N" => Ok(false),
        _ => Err(MSG_INVALID_CHOICE),
    }
}
