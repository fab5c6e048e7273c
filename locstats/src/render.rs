//! Text rendering for CLI output

use locstatslib::Buckets;

/// Render one `<bucket>: loc=.. comments=.. void=..` line per bucket.
pub fn render_buckets(buckets: &Buckets) -> String {
    let mut out = String::new();
    for line in buckets.lines() {
        out.push_str(&line.to_string());
        out.push('\n');
    }
    out
}
