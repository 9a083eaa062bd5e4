//! Output-file writer.

use std::path::Path;

use anyhow::Context;

use stacksent_core::Question;

/// Serialize `questions` as a pretty-printed JSON array at `path`,
/// replacing any existing file of the same name.
pub(crate) fn write_output(path: &Path, questions: &[Question]) -> anyhow::Result<()> {
    let payload =
        serde_json::to_vec_pretty(questions).context("serializing output collection")?;
    std::fs::write(path, payload).with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}
