use crate::dataset::Dataset;
use crate::engine;
use anyhow::Result;

/// Print the fixed view enumeration, one selector per line, in the order
/// the presentation layer should offer them.
pub fn handle_views() -> Result<()> {
    let dataset = Dataset::embedded()?;
    for view in engine::list_views(dataset.table()) {
        println!("{view}");
    }
    Ok(())
}
