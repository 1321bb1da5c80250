use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Run the HTTP API.
    Serve(ServeArgs),
    /// Pull the ExerciseDB catalog and insert exercises not stored yet.
    Refresh(RefreshArgs),
    /// Replace all labels and exercises with the starter set.
    Seed,
    /// Create the schema if needed and report collection sizes.
    Setup,
    /// List exercises, optionally filtered.
    Exercises(ExercisesArgs),
    /// Distinct values of one exercise field.
    Distinct(DistinctArgs),
    /// Print the JSON Schema for a record type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct ServeArgs {
    /// Address to bind (overrides `server.bind`).
    #[arg(long)]
    pub bind: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct RefreshArgs {
    /// Items per catalog page; 0 fetches everything in one request.
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Duplicate-check key: composite or name.
    #[arg(long)]
    pub policy: Option<btm_core::IdentityPolicy>,
}

#[derive(Clone, Debug, Args)]
pub struct ExercisesArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub body_part: Option<String>,
    #[arg(long)]
    pub equipment: Option<String>,
    #[arg(long)]
    pub target: Option<String>,
    #[arg(long)]
    pub difficulty: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct DistinctArgs {
    /// One of name, body_part, equipment, target, difficulty.
    pub field: btm_core::ExerciseField,
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// Record type: exercise, label, identity.
    #[arg(default_value = "exercise")]
    pub type_name: String,
}
