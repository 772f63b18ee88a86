fn main() {
    // Failures are reported as printed text; the process still exits normally.
    if let Err(err) = roster_report::run() {
        roster_report::print_failure(&err);
    }
}
