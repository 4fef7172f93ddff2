use crate::domain::model::{Employee, Scenario, MAX_CAPACITY};
use crate::utils::error::{CarpoolError, Result};
use crate::utils::validation::{check_at_least, check_range, parse_integer};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::{Path, PathBuf};

const END_OF_INPUT: &str = "unexpected end of input";

/// Opens `path` and parses every scenario in it. The file is closed before
/// this returns, whether parsing succeeded or not.
pub fn load_file(path: &Path) -> Result<Vec<Scenario>> {
    tracing::info!("Parsing scenario file: {}", path.display());

    let file = File::open(path).map_err(|source| CarpoolError::SourceUnavailable {
        path: path.to_path_buf(),
        source,
    })?;
    let scenarios = parse_scenarios(BufReader::new(file), path);

    tracing::debug!("Closed scenario file: {}", path.display());
    scenarios
}

/// Parses the scenario format from `reader`, reading it forward exactly once.
/// `origin` names the input in error messages and logs.
pub fn parse_scenarios<R: BufRead>(reader: R, origin: &Path) -> Result<Vec<Scenario>> {
    let mut cursor = LineCursor::new(reader, origin);
    match read_all(&mut cursor) {
        Ok(scenarios) => {
            tracing::info!(
                "Finished parsing {}: {} scenario(s)",
                origin.display(),
                scenarios.len()
            );
            Ok(scenarios)
        }
        Err(e) => {
            tracing::debug!("Rejected {}: {}", origin.display(), e);
            Err(e)
        }
    }
}

struct LineCursor<R> {
    lines: Lines<R>,
    line: usize,
    origin: PathBuf,
}

impl<R: BufRead> LineCursor<R> {
    fn new(reader: R, origin: &Path) -> Self {
        Self {
            lines: reader.lines(),
            line: 0,
            origin: origin.to_path_buf(),
        }
    }

    /// Returns the next physical line, or `None` once the input is exhausted.
    fn next_line(&mut self) -> Result<Option<String>> {
        match self.lines.next() {
            None => Ok(None),
            Some(Ok(text)) => {
                self.line += 1;
                Ok(Some(text))
            }
            Some(Err(source)) => Err(CarpoolError::SourceUnavailable {
                path: self.origin.clone(),
                source,
            }),
        }
    }

    /// Line number of the most recent line, or of the missing one after
    /// `next_line` returned `None`.
    fn position(&self, exhausted: bool) -> usize {
        if exhausted {
            self.line + 1
        } else {
            self.line
        }
    }
}

fn read_all<R: BufRead>(cursor: &mut LineCursor<R>) -> Result<Vec<Scenario>> {
    let line = cursor.next_line()?;
    let scenario_count = parse_count(line.as_deref()).map_err(|reason| {
        CarpoolError::MalformedCount {
            line: cursor.position(line.is_none()),
            reason,
        }
    })?;

    let mut scenarios = Vec::with_capacity(scenario_count.min(1024));
    for case in 1..=scenario_count {
        scenarios.push(read_scenario(cursor, case)?);
    }
    Ok(scenarios)
}

fn read_scenario<R: BufRead>(cursor: &mut LineCursor<R>, case: usize) -> Result<Scenario> {
    let line = cursor.next_line()?;
    let (town_count, office_town) = parse_header(line.as_deref()).map_err(|reason| {
        CarpoolError::MalformedHeader {
            case,
            line: cursor.position(line.is_none()),
            reason,
        }
    })?;

    let line = cursor.next_line()?;
    let employee_count = parse_employee_count(line.as_deref()).map_err(|reason| {
        CarpoolError::MalformedEmployeeCount {
            case,
            line: cursor.position(line.is_none()),
            reason,
        }
    })?;

    let mut employees = Vec::with_capacity(employee_count.min(4096));
    for employee in 1..=employee_count {
        let line = cursor.next_line()?;
        let parsed = parse_employee(line.as_deref(), town_count).map_err(|reason| {
            CarpoolError::MalformedEmployee {
                case,
                employee,
                line: cursor.position(line.is_none()),
                reason,
            }
        })?;
        employees.push(parsed);
    }

    tracing::debug!(
        case,
        towns = town_count,
        office = office_town,
        employees = employees.len(),
        "Parsed scenario"
    );

    Ok(Scenario {
        town_count,
        office_town,
        employees,
    })
}

fn parse_count(line: Option<&str>) -> std::result::Result<usize, String> {
    let value = single_value("scenario count", line)?;
    let value = check_at_least("scenario count", value, 0)?;
    to_usize("scenario count", value)
}

fn parse_header(line: Option<&str>) -> std::result::Result<(usize, usize), String> {
    let (towns, office) = value_pair(("town count", "office town"), line)?;
    let towns = check_at_least("town count", towns, 1)?;
    let office = check_range("office town", office, 1, towns)?;
    Ok((to_usize("town count", towns)?, to_usize("office town", office)?))
}

fn parse_employee_count(line: Option<&str>) -> std::result::Result<usize, String> {
    let value = single_value("employee count", line)?;
    let value = check_at_least("employee count", value, 1)?;
    to_usize("employee count", value)
}

fn parse_employee(line: Option<&str>, town_count: usize) -> std::result::Result<Employee, String> {
    let (hometown, capacity) = value_pair(("hometown", "capacity"), line)?;
    let max_town = i64::try_from(town_count).unwrap_or(i64::MAX);
    let hometown = check_range("hometown", hometown, 1, max_town)?;
    let capacity = check_range("capacity", capacity, 0, i64::from(MAX_CAPACITY))?;
    Ok(Employee {
        hometown: to_usize("hometown", hometown)?,
        capacity: u8::try_from(capacity).map_err(|_| format!("capacity {} is too large", capacity))?,
    })
}

/// A line holding exactly one integer.
fn single_value(field_name: &str, line: Option<&str>) -> std::result::Result<i64, String> {
    let line = line.ok_or_else(|| END_OF_INPUT.to_string())?;
    let tokens: Vec<&str> = line.split_whitespace().collect();
    match tokens.as_slice() {
        [token] => parse_integer(field_name, token),
        [] => Err(format!("expected {}, found an empty line", field_name)),
        _ => Err(format!(
            "expected a single {}, found {} values",
            field_name,
            tokens.len()
        )),
    }
}

/// A line whose first two tokens are integers. Trailing tokens are ignored.
fn value_pair(
    (first, second): (&str, &str),
    line: Option<&str>,
) -> std::result::Result<(i64, i64), String> {
    let line = line.ok_or_else(|| END_OF_INPUT.to_string())?;
    let mut tokens = line.split_whitespace();
    match (tokens.next(), tokens.next()) {
        (Some(a), Some(b)) => Ok((parse_integer(first, a)?, parse_integer(second, b)?)),
        (found, _) => Err(format!(
            "expected '<{}> <{}>', found {} value(s)",
            first,
            second,
            usize::from(found.is_some())
        )),
    }
}

fn to_usize(field_name: &str, value: i64) -> std::result::Result<usize, String> {
    usize::try_from(value).map_err(|_| format!("{} {} is out of range", field_name, value))
}
