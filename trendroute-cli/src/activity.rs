//! `select` and `feedback` commands.

use std::io::Write;

use clap::Args;
use trendroute_core::{ActivitySink, Feedback, Rating};

use crate::{CliError, write_json};

/// CLI arguments for the `select` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct SelectArgs {
    /// Route that was chosen.
    #[arg(value_name = "route-id")]
    pub(crate) route_id: String,
    /// Caller identifier.
    #[arg(long = "user-id", value_name = "id")]
    pub(crate) user_id: Option<String>,
}

/// CLI arguments for the `feedback` subcommand.
#[derive(Debug, Clone, Args)]
pub(crate) struct FeedbackArgs {
    /// Route being rated.
    #[arg(value_name = "route-id")]
    pub(crate) route_id: String,
    /// Star rating from 1 to 5.
    #[arg(long, value_name = "n")]
    pub(crate) rating: u8,
    /// Free-text comment.
    #[arg(long, value_name = "text")]
    pub(crate) comment: Option<String>,
    /// Caller identifier.
    #[arg(long = "user-id", value_name = "id")]
    pub(crate) user_id: Option<String>,
}

impl TryFrom<FeedbackArgs> for Feedback {
    type Error = CliError;

    fn try_from(args: FeedbackArgs) -> Result<Self, Self::Error> {
        Ok(Self {
            route_id: args.route_id,
            rating: Rating::new(args.rating)?,
            comment: args.comment,
            user_id: args.user_id,
        })
    }
}

pub(crate) fn run_select_with(
    args: &SelectArgs,
    sink: &dyn ActivitySink,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let receipt = sink.record_selection(&args.route_id, args.user_id.as_deref());
    write_json(writer, &receipt)
}

pub(crate) fn run_feedback_with(
    args: FeedbackArgs,
    sink: &dyn ActivitySink,
    writer: &mut dyn Write,
) -> Result<(), CliError> {
    let feedback = Feedback::try_from(args)?;
    write_json(writer, &sink.record_feedback(&feedback))
}
