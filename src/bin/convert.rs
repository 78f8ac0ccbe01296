//! One-shot command line conversion
//!
//! Usage: convert <category> <from_unit> <to_unit> <value>
//!        convert <category>            (list units and presets)

use unitconv::conversion::{
    convert, copy_text, find_unit, format_result, list_presets, list_units, parse_category,
    parse_input,
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.as_slice() {
        [category] => {
            let category = parse_category(category)?;
            println!("{} units:", category.display_name());
            for unit in list_units(category) {
                let marker = if unit.is_base() { " (base)" } else { "" };
                println!("  {:<8} {:<6} {}{}", unit.key, unit.symbol, unit.name, marker);
            }
            println!("Presets:");
            for preset in list_presets(category) {
                println!("  {}", preset.label);
            }
        }
        [category, from, to, value] => {
            let category = parse_category(category)?;
            let result = convert(category, from, to, parse_input(value)?)?;
            let from = find_unit(category, from)?;
            let to = find_unit(category, to)?;
            println!("{}", copy_text(value, from, &format_result(result), to));
        }
        _ => {
            eprintln!("Usage: convert <category> <from_unit> <to_unit> <value>");
            eprintln!("       convert <category>");
            std::process::exit(2);
        }
    }

    Ok(())
}
