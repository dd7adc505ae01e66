use daybook_core::Section;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    for section in Section::ALL {
        println!("{:<8} {:<9} {}", section.as_str(), section.label(), section.title());
    }
    Ok(())
}
