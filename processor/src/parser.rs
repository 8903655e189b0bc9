use std::collections::HashSet;

use log::warn;
use scheduler::{Task, TaskQueue, Ticks};

use crate::error::Error;

// Parse the task spec, one `<name>,<arrival>,<burst>` record per line
pub fn read_tasks(stream: &[u8]) -> Result<TaskQueue, Error> {
    let string = std::str::from_utf8(stream).map_err(|_| Error::Utf8Error)?;

    let mut tasks = TaskQueue::new();
    let mut names = HashSet::new();
    // every task finishes by the sum of all arrivals and bursts
    let mut horizon: Ticks = 0;

    for (i, line) in string.lines().enumerate() {
        let row = i + 1;
        let line = line.trim();

        // Ignore empty lines
        if line.is_empty() {
            continue;
        }

        let fields = line.split(',').map(str::trim).collect::<Vec<&str>>();
        let &[name, arrival, burst] = fields.as_slice() else {
            return Err(Error::InvalidRecord(row, line.to_string()));
        };

        if name.is_empty() {
            return Err(Error::MissingName(row));
        }

        let arrival_time = parse_time(row, arrival)?;
        let burst_time = parse_time(row, burst)?;
        if burst_time == 0 {
            return Err(Error::ZeroBurst(row));
        }

        horizon = horizon
            .checked_add(arrival_time)
            .and_then(|horizon| horizon.checked_add(burst_time))
            .ok_or(Error::TimeOverflow(row))?;

        if !names.insert(name.to_string()) {
            warn!("Task name {name} on line {row} is used more than once");
        }

        tasks.enqueue(Task::new(name, arrival_time, burst_time));
    }

    Ok(tasks)
}

fn parse_time(row: usize, value: &str) -> Result<Ticks, Error> {
    value
        .parse::<Ticks>()
        .map_err(|_| Error::InvalidTime(row, value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_in_order() {
        let tasks = read_tasks(b"AAA,0,5\nB,1,4\n").unwrap();
        let tasks = tasks.into_iter().collect::<Vec<_>>();
        assert_eq!(tasks, [Task::new("AAA", 0, 5), Task::new("B", 1, 4)]);
    }

    #[test]
    fn trims_whitespace_and_skips_blank_lines() {
        let tasks = read_tasks(b" A , 2 , 3 \r\n\n   \nB,0,1").unwrap();
        let tasks = tasks.into_iter().collect::<Vec<_>>();
        assert_eq!(tasks, [Task::new("A", 2, 3), Task::new("B", 0, 1)]);
    }

    #[test]
    fn empty_input_yields_no_tasks() {
        assert!(read_tasks(b"").unwrap().is_empty());
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            read_tasks(b"A,0,5\nB,1"),
            Err(Error::InvalidRecord(2, "B,1".to_string()))
        );
        assert_eq!(
            read_tasks(b"A,0,5,7"),
            Err(Error::InvalidRecord(1, "A,0,5,7".to_string()))
        );
    }

    #[test]
    fn rejects_missing_name() {
        assert_eq!(read_tasks(b",0,5"), Err(Error::MissingName(1)));
    }

    #[test]
    fn rejects_invalid_times() {
        assert_eq!(
            read_tasks(b"A,-1,5"),
            Err(Error::InvalidTime(1, "-1".to_string()))
        );
        assert_eq!(
            read_tasks(b"A,0,x"),
            Err(Error::InvalidTime(1, "x".to_string()))
        );
    }

    #[test]
    fn rejects_zero_burst() {
        assert_eq!(read_tasks(b"A,0,1\nB,3,0"), Err(Error::ZeroBurst(2)));
    }

    #[test]
    fn rejects_times_past_the_tick_range() {
        assert_eq!(
            read_tasks(b"A,18446744073709551615,1"),
            Err(Error::TimeOverflow(1))
        );
        assert_eq!(
            read_tasks(b"A,0,10000000000000000000\nB,0,10000000000000000000"),
            Err(Error::TimeOverflow(2))
        );
    }

    #[test]
    fn accepts_times_up_to_the_tick_range() {
        let tasks = read_tasks(b"A,0,100000000000000000\nB,0,100000000000000000").unwrap();
        assert_eq!(tasks.len(), 2);
    }

    #[test]
    fn rejects_invalid_utf8() {
        assert_eq!(read_tasks(&[0x41, 0xff, 0x2c]), Err(Error::Utf8Error));
    }

    #[test]
    fn accepts_duplicate_names() {
        let tasks = read_tasks(b"A,0,1\nA,1,1").unwrap();
        assert_eq!(tasks.len(), 2);
    }
}
