// Shared test helpers: result-tree fixtures on disk and canned log lines

#![allow(dead_code)]

use std::path::Path;

pub const PROCESS: &str = "harbour-lcrail";

pub fn nethogs_line(time: &str, sent: &str, received: &str) -> String {
    format!("Tue Mar 13 {time} CET 2018 /usr/bin/{PROCESS}/2211/100000 {sent} {received}")
}

pub fn top_line(time: &str, cpu: &str, mem: &str) -> String {
    format!(
        "Tue Mar 13 {time} CET 2018 2211 nemo 20 0 254m 41m 28m S {cpu} {mem} 0:03.12 {PROCESS}"
    )
}

/// Writes `contents` to `<root>/<benchmark>/<part>/<device>/<filename>`.
pub fn write_result(
    root: &Path,
    benchmark: &str,
    part: &str,
    device: &str,
    filename: &str,
    contents: &str,
) {
    let dir = root.join(benchmark).join(part).join(device);
    std::fs::create_dir_all(&dir).unwrap();
    std::fs::write(dir.join(filename), contents).unwrap();
}

pub fn lines(lines: &[String]) -> String {
    let mut out = lines.join("\n");
    out.push('\n');
    out
}
