//! The text format of scheduling instances.
//!
//! ```text
//! # three machines
//! 3
//! 4: 0 1
//! 2: 2
//! 3
//! ```
//!
//! The first line which is not empty or a comment holds the number of machines. Every further line
//! is one job, given as its duration, optionally followed by a colon and the machines it may run
//! on. A job without a machine list, or with `*` as its list, may run on every machine. Everything
//! after a `#` is ignored.
use eligo_core::model::Problem;
use thiserror::Error;

use crate::result::EligoResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub(crate) enum InstanceParseError {
    #[error("The instance does not contain the number of machines.")]
    MissingMachineCount,
    #[error("Line {line}: expected the number of machines, found '{value}'.")]
    InvalidMachineCount { line: usize, value: String },
    #[error("Line {line}: expected a duration, found '{value}'.")]
    InvalidDuration { line: usize, value: String },
    #[error("Line {line}: expected a machine index, found '{value}'.")]
    InvalidMachine { line: usize, value: String },
}

/// The jobs of an instance, before they are validated into a [`Problem`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Instance {
    pub(crate) num_machines: usize,
    pub(crate) jobs: Vec<(i64, Vec<usize>)>,
}

impl Instance {
    pub(crate) fn into_problem(self) -> EligoResult<Problem> {
        Ok(Problem::new(self.num_machines, self.jobs)?)
    }
}

pub(crate) fn parse_instance(source: &str) -> Result<Instance, InstanceParseError> {
    let mut lines = source
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, strip_comment(line).trim()))
        .filter(|(_, line)| !line.is_empty());

    let (line, value) = lines.next().ok_or(InstanceParseError::MissingMachineCount)?;
    let num_machines =
        value
            .parse::<usize>()
            .map_err(|_| InstanceParseError::InvalidMachineCount {
                line,
                value: value.to_owned(),
            })?;

    let jobs = lines
        .map(|(line, value)| parse_job(line, value, num_machines))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Instance { num_machines, jobs })
}

fn strip_comment(line: &str) -> &str {
    line.split_once('#').map_or(line, |(content, _)| content)
}

fn parse_job(
    line: usize,
    value: &str,
    num_machines: usize,
) -> Result<(i64, Vec<usize>), InstanceParseError> {
    let (duration, machines) = match value.split_once(':') {
        Some((duration, machines)) => (duration.trim(), Some(machines.trim())),
        None => (value, None),
    };

    let duration = duration
        .parse::<i64>()
        .map_err(|_| InstanceParseError::InvalidDuration {
            line,
            value: duration.to_owned(),
        })?;

    let machines = match machines {
        None | Some("*") => (0..num_machines).collect(),
        Some(machines) => machines
            .split_whitespace()
            .map(|machine| {
                machine
                    .parse::<usize>()
                    .map_err(|_| InstanceParseError::InvalidMachine {
                        line,
                        value: machine.to_owned(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok((duration, machines))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::EligoError;

    #[test]
    fn jobs_without_a_machine_list_may_run_anywhere() {
        let instance = parse_instance("2\n5\n3: *\n").expect("valid instance");

        assert_eq!(instance.num_machines, 2);
        assert_eq!(instance.jobs, vec![(5, vec![0, 1]), (3, vec![0, 1])]);
    }

    #[test]
    fn comments_and_blank_lines_are_skipped() {
        let source = "# machines\n3 # trailing\n\n4: 0 2\n# a job\n1: 1\n";
        let instance = parse_instance(source).expect("valid instance");

        assert_eq!(instance.num_machines, 3);
        assert_eq!(instance.jobs, vec![(4, vec![0, 2]), (1, vec![1])]);
    }

    #[test]
    fn an_empty_machine_list_is_left_to_validation() {
        let instance = parse_instance("2\n4:\n").expect("syntactically valid");

        assert_eq!(instance.jobs, vec![(4, vec![])]);
        assert!(matches!(
            instance.into_problem(),
            Err(EligoError::InvalidInput(_))
        ));
    }

    #[test]
    fn malformed_values_report_their_line() {
        assert_eq!(
            parse_instance("# nothing\n"),
            Err(InstanceParseError::MissingMachineCount)
        );
        assert_eq!(
            parse_instance("two\n"),
            Err(InstanceParseError::InvalidMachineCount {
                line: 1,
                value: "two".to_owned()
            })
        );
        assert_eq!(
            parse_instance("2\n\n4.5: 0\n"),
            Err(InstanceParseError::InvalidDuration {
                line: 3,
                value: "4.5".to_owned()
            })
        );
        assert_eq!(
            parse_instance("2\n4: 0 x\n"),
            Err(InstanceParseError::InvalidMachine {
                line: 2,
                value: "x".to_owned()
            })
        );
    }

    #[test]
    fn negative_durations_are_rejected_by_the_problem() {
        let instance = parse_instance("1\n-3\n").expect("syntactically valid");

        assert!(matches!(
            instance.into_problem(),
            Err(EligoError::InvalidInput(_))
        ));
    }
}
