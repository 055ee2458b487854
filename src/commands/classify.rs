//! Single-record classification from command-line fields.

use anyhow::Result;
use tracing::debug;

use pubclass_core::{Classifier, venue_display};

use crate::cli::ClassifyArgs;

pub fn run_classify_command(args: &ClassifyArgs, classifier: &Classifier) -> Result<()> {
    let record = args.to_record();
    if record.is_blank() {
        debug!("no fields given; record falls through to the fallback tier");
    }

    let decision = classifier.decide(&record);
    println!("category = {}", decision.category);
    if args.explain {
        println!("tier = {}", decision.tier);
    }
    println!("venue = {}", venue_display(&record));

    Ok(())
}
