use anyhow::Result;
use crux_core::typegen::TypeGen;
use std::path::PathBuf;
use wifi_portal_core::{
    events::{BridgeEvent, CatalogEvent, IntentEvent, SubmitEvent, UiEvent},
    notifications::{Notification, Severity},
    types::{IntentField, SubmissionOutcome, SubmissionState},
    App, DeadlineOutput,
};

fn main() -> Result<()> {
    println!("cargo:rerun-if-changed=../app");

    let mut gen = TypeGen::new();

    gen.register_app::<App>()?;

    // Explicitly register domain event enums to ensure all variants are traced
    gen.register_type::<CatalogEvent>()?;
    gen.register_type::<BridgeEvent>()?;
    gen.register_type::<IntentEvent>()?;
    gen.register_type::<SubmitEvent>()?;
    gen.register_type::<UiEvent>()?;

    // Explicitly register other enums to ensure all variants are traced
    gen.register_type::<IntentField>()?;
    gen.register_type::<SubmissionState>()?;
    gen.register_type::<SubmissionOutcome>()?;
    gen.register_type::<Notification>()?;
    gen.register_type::<Severity>()?;
    gen.register_type::<DeadlineOutput>()?;

    let output_root = PathBuf::from("./generated");

    gen.typescript("shared_types", output_root.join("typescript"))?;

    Ok(())
}
