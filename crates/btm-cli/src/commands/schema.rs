use anyhow::bail;
use btm_core::{Exercise, ExerciseIdentity, Label};
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

/// Handle `btm schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let schema = match args.type_name.as_str() {
        "exercise" => schema_for!(Exercise),
        "label" => schema_for!(Label),
        "identity" => schema_for!(ExerciseIdentity),
        other => bail!("unknown record type '{other}' (expected exercise, label, identity)"),
    };
    output(&schema, flags.format)
}
