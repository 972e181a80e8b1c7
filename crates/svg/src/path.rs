use anyhow::{Context, Result, bail};

/// Every SVG path command letter; anything else in path data is an error
const PATH_COMMANDS: &str = "MmLlCcZzHhVvSsQqTtAa";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    fn offset(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Parse path data into the points it visits.
///
/// Supports `M`/`m`, `L`/`l`, `C`/`c` and `Z`/`z`, the subset tracers such
/// as Potrace emit. Extra coordinate pairs after a moveto are implicit
/// linetos. Curves contribute their end point only, so the bounds are the
/// hull of on-curve points.
pub fn parse_path(d: &str) -> Result<Vec<Point>> {
    let mut points = Vec::new();
    let mut current = Point::default();
    let mut subpath_start = current;

    for (cmd, args) in split_commands(d)? {
        let args = scan_numbers(args)
            .with_context(|| format!("Invalid arguments for path command '{}'", cmd))?;

        match cmd {
            'M' | 'm' => {
                for (i, pair) in groups(cmd, &args, 2)?.enumerate() {
                    current = if cmd == 'm' {
                        current.offset(pair[0], pair[1])
                    } else {
                        Point::new(pair[0], pair[1])
                    };
                    if i == 0 {
                        subpath_start = current;
                    }
                    points.push(current);
                }
            }
            'L' | 'l' => {
                for pair in groups(cmd, &args, 2)? {
                    current = if cmd == 'l' {
                        current.offset(pair[0], pair[1])
                    } else {
                        Point::new(pair[0], pair[1])
                    };
                    points.push(current);
                }
            }
            'C' | 'c' => {
                for curve in groups(cmd, &args, 6)? {
                    current = if cmd == 'c' {
                        current.offset(curve[4], curve[5])
                    } else {
                        Point::new(curve[4], curve[5])
                    };
                    points.push(current);
                }
            }
            'Z' | 'z' => {
                if !args.is_empty() {
                    bail!("Path command '{}' takes no arguments", cmd);
                }
                current = subpath_start;
            }
            other => bail!("Unsupported path command '{}'", other),
        }
    }

    Ok(points)
}

fn split_commands(d: &str) -> Result<Vec<(char, &str)>> {
    let mut segments = Vec::new();
    let mut open: Option<(char, usize)> = None;

    for (i, c) in d.char_indices() {
        if PATH_COMMANDS.contains(c) {
            if let Some((cmd, start)) = open {
                segments.push((cmd, &d[start..i]));
            }
            open = Some((c, i + c.len_utf8()));
        } else if open.is_none() && !c.is_whitespace() {
            bail!("Path data must start with a command, found '{}'", c);
        }
    }

    if let Some((cmd, start)) = open {
        segments.push((cmd, &d[start..]));
    }

    Ok(segments)
}

fn groups<'a>(cmd: char, args: &'a [f64], size: usize) -> Result<std::slice::ChunksExact<'a, f64>> {
    if args.is_empty() || args.len() % size != 0 {
        bail!(
            "Path command '{}' expects arguments in groups of {}, got {}",
            cmd,
            size,
            args.len()
        );
    }
    Ok(args.chunks_exact(size))
}

/// Scan SVG number lists: separators are whitespace or commas, and a sign
/// or a second `.` starts a new number (`1-2` is `1 -2`, `0.5.5` is
/// `0.5 0.5`).
pub(crate) fn scan_numbers(s: &str) -> Result<Vec<f64>> {
    let bytes = s.as_bytes();
    let mut numbers = Vec::new();
    let mut i = 0;

    while i < bytes.len() {
        let c = bytes[i];
        if c.is_ascii_whitespace() || c == b',' {
            i += 1;
            continue;
        }

        let start = i;
        if c == b'+' || c == b'-' {
            i += 1;
        }

        let mut seen_digit = false;
        let mut seen_dot = false;
        while i < bytes.len() {
            match bytes[i] {
                b'0'..=b'9' => seen_digit = true,
                b'.' if !seen_dot => seen_dot = true,
                _ => break,
            }
            i += 1;
        }

        if seen_digit && i < bytes.len() && (bytes[i] == b'e' || bytes[i] == b'E') {
            let mut j = i + 1;
            if j < bytes.len() && (bytes[j] == b'+' || bytes[j] == b'-') {
                j += 1;
            }
            if j < bytes.len() && bytes[j].is_ascii_digit() {
                while j < bytes.len() && bytes[j].is_ascii_digit() {
                    j += 1;
                }
                i = j;
            }
        }

        if !seen_digit {
            let found = s[start..].chars().next().unwrap_or(' ');
            bail!("Expected a number, found '{}'", found);
        }

        let literal = &s[start..i];
        let value = literal
            .parse::<f64>()
            .with_context(|| format!("Invalid number '{}'", literal))?;
        numbers.push(value);
    }

    Ok(numbers)
}
