use std::env;
use std::fs;

use processor::{format_logs, read_tasks, simulate};


fn write_logs(folder: &str, name: &str, logs: &str) {
    fs::create_dir_all(format!("../outputs/{folder}")).unwrap();
    fs::write(format!("../outputs/{folder}/{name}.log"), logs).unwrap();
}

fn read_logs(folder: &str, name: &str) -> String {
    fs::read_to_string(format!("../outputs/{folder}/{name}.log")).unwrap()
}

fn report(input: &str) -> String {
    let tasks = read_tasks(input.as_bytes()).unwrap();
    format_logs(&simulate(tasks).unwrap())
}

fn run(folder: &str, name: &str, input: &str) {
    let output = report(input);

    if env::var("WRITE_OUTPUT").is_ok() {
        write_logs(folder, name, &output);
    } else {
        let reference = read_logs(folder, name);

        println!("\nleft = Correct Output\nright = Your Output\n");
        use pretty_assertions::assert_eq;
        assert_eq!(reference, output);
    }
}
