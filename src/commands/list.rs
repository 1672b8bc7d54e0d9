use console::style;
use quick_scaffold::error::Result;
use quick_scaffold::registry::{self, TemplateEntry};

pub fn run() -> Result<()> {
    let entries = registry::all();

    println!(
        "{} ({} templates)\n",
        style("Available templates").bold(),
        entries.len()
    );

    for entry in &entries {
        print_entry(entry);
    }

    Ok(())
}

pub fn print_entry(entry: &TemplateEntry) {
    println!(
        "  {:12} {} {}",
        style(entry.id.as_str()).cyan(),
        style(format!("{}:", entry.name)).bold(),
        entry.description
    );
}
