//! Demonstrates type-name resolution and labeled-array inspection

use anyhow::Result;
use typelens::{format_axis_labels, resolve, type_name_of, AxisLabeled, TypeReport};

/// Minimal two-dimensional frame standing in for the host dataframe library
struct DemoFrame {
    rows: Vec<String>,
    cols: Vec<String>,
}

impl AxisLabeled for DemoFrame {
    fn ndim(&self) -> usize {
        2
    }

    fn axis_labels(&self, axis: usize) -> Option<&[String]> {
        match axis {
            0 => Some(&self.rows),
            1 => Some(&self.cols),
            _ => None,
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let symbols = vec![
        ("Legacy mangled symbol", "_ZN4core3fmt9Formatter3pad17h1234567890abcdefE"),
        ("Short mangled path", "_ZN3foo3barE"),
        ("Plain identifier", "already_readable"),
    ];

    for (name, symbol) in symbols {
        println!("=== {} ===", name);
        println!("  {} -> {}", symbol, resolve(symbol));
    }

    println!("\n=== Values ===");
    println!("  42i32 is a {}", type_name_of(&42i32));
    let pointer: *const char = std::ptr::null();
    println!("  null char pointer is a {}", type_name_of(&pointer));

    println!("\n=== Type report ===");
    println!("{}", TypeReport::of::<f64>().to_json()?);

    println!("\n=== Frame labels ===");
    let frame = DemoFrame {
        rows: vec!["2024".into(), "2025".into()],
        cols: vec!["temperature".into(), "rainfall".into()],
    };
    println!("  rows: {}", format_axis_labels(&frame, 0)?);
    println!("  cols: {}", format_axis_labels(&frame, 1)?);

    Ok(())
}
