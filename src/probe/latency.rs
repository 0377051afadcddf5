//! Round-trip time extraction from `ping` output.
//!
//! Summary lines are preferred over per-reply lines:
//! - Windows: `Minimum = 3ms, Maximum = 3ms, Average = 3ms`
//! - Linux: `rtt min/avg/max/mdev = 0.041/0.052/0.063/0.011 ms`
//! - BSD/macOS: `round-trip min/avg/max/stddev = 1.1/1.2/1.3/0.1 ms`
//! - Any platform: `... time=12.3 ms` or `time<1ms`

/// Extract the round-trip time in whole milliseconds.
pub fn parse_latency(output: &str) -> Option<u32> {
    output
        .lines()
        .find_map(parse_summary_line)
        .or_else(|| output.lines().find_map(parse_reply_line))
}

fn parse_summary_line(line: &str) -> Option<u32> {
    if let Some(idx) = line.find("Average") {
        let value = line[idx..].split('=').nth(1)?;
        return to_millis(leading_number(value.trim())?);
    }

    if line.contains("min/avg/max") {
        let values = line.split('=').nth(1)?;
        let avg = values.trim().split('/').nth(1)?;
        return to_millis(avg.trim().parse().ok()?);
    }

    None
}

fn parse_reply_line(line: &str) -> Option<u32> {
    let idx = line.find("time=").or_else(|| line.find("time<"))?;
    let value = &line[idx + "time=".len()..];
    to_millis(leading_number(value.trim_start())?)
}

fn leading_number(s: &str) -> Option<f64> {
    let end = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    s[..end].parse().ok()
}

fn to_millis(value: f64) -> Option<u32> {
    if !value.is_finite() || value < 0.0 || value > f64::from(u32::MAX) {
        return None;
    }
    Some(value.round() as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOWS: &str = "\
Pinging 192.168.192.65 with 32 bytes of data:
Reply from 192.168.192.65: bytes=32 time=14ms TTL=64

Ping statistics for 192.168.192.65:
    Packets: Sent = 1, Received = 1, Lost = 0 (0% loss),
Approximate round trip times in milli-seconds:
    Minimum = 14ms, Maximum = 14ms, Average = 14ms
";

    const LINUX: &str = "\
PING 10.0.0.7 (10.0.0.7) 56(84) bytes of data.
64 bytes from 10.0.0.7: icmp_seq=1 ttl=64 time=212 ms

--- 10.0.0.7 ping statistics ---
1 packets transmitted, 1 received, 0% packet loss, time 0ms
rtt min/avg/max/mdev = 212.402/212.402/212.402/0.000 ms
";

    const MACOS: &str = "\
PING 10.0.0.7 (10.0.0.7): 56 data bytes
64 bytes from 10.0.0.7: icmp_seq=0 ttl=64 time=3.612 ms

--- 10.0.0.7 ping statistics ---
1 packets transmitted, 1 packets received, 0.0% packet loss
round-trip min/avg/max/stddev = 3.612/3.612/3.612/0.000 ms
";

    #[test]
    fn test_windows_average() {
        assert_eq!(parse_latency(WINDOWS), Some(14));
    }

    #[test]
    fn test_unix_summaries_round_to_nearest() {
        assert_eq!(parse_latency(LINUX), Some(212));
        assert_eq!(parse_latency(MACOS), Some(4));
    }

    #[test]
    fn test_reply_line_fallback() {
        assert_eq!(parse_latency("64 bytes from 1.2.3.4: icmp_seq=1 ttl=57 time=48.6 ms"), Some(49));
        assert_eq!(parse_latency("Reply from 1.2.3.4: bytes=32 time<1ms TTL=128"), Some(1));
    }

    #[test]
    fn test_unparsable_output() {
        assert_eq!(parse_latency(""), None);
        assert_eq!(parse_latency("Request timed out."), None);
        assert_eq!(parse_latency("1 packets transmitted, 0 received, 100% packet loss, time 0ms"), None);
    }
}
