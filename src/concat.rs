use std::future::Future;
use std::path::{Path, PathBuf};

use tokio::process::Command;

use crate::error::Error;

/// The narrow seam to the external media tool: an ordered segment list in,
/// one output file out. Tests substitute a recording mock here so the
/// pipeline can run without a real subprocess.
pub trait Concatenator {
    fn concatenate(
        &self,
        segments: &[PathBuf],
        output: &Path,
    ) -> impl Future<Output = Result<(), Error>> + Send;
}

/// Concatenates via ffmpeg's `concat:` protocol in stream-copy mode, with the
/// `aac_adtstoasc` bitstream filter so ADTS audio from .ts segments fits the
/// MP4 container.
pub struct FfmpegConcatenator {
    program: String,
}

impl FfmpegConcatenator {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

fn ffmpeg_args(segments: &[PathBuf], output: &Path) -> Vec<String> {
    let joined = segments
        .iter()
        .map(|p| p.to_string_lossy().into_owned())
        .collect::<Vec<_>>()
        .join("|");
    vec![
        "-i".to_string(),
        format!("concat:{}", joined),
        "-c".to_string(),
        "copy".to_string(),
        "-bsf:a".to_string(),
        "aac_adtstoasc".to_string(),
        "-y".to_string(),
        output.to_string_lossy().into_owned(),
    ]
}

impl Concatenator for FfmpegConcatenator {
    async fn concatenate(&self, segments: &[PathBuf], output: &Path) -> Result<(), Error> {
        let command_output = Command::new(&self.program)
            .args(ffmpeg_args(segments, output))
            .output()
            .await
            .map_err(|err| Error::ExternalTool {
                detail: format!("failed to launch {}: {}", self.program, err),
            })?;

        if !command_output.status.success() {
            let stderr = String::from_utf8_lossy(&command_output.stderr);
            return Err(Error::ExternalTool {
                detail: format!("{} exited with {}: {}", self.program, command_output.status, stderr.trim()),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_join_segments_in_given_order() {
        let segments = vec![PathBuf::from("d/1.ts"), PathBuf::from("d/2.ts"), PathBuf::from("d/10.ts")];
        let args = ffmpeg_args(&segments, Path::new("d/out.mp4"));
        assert_eq!(
            args,
            [
                "-i",
                "concat:d/1.ts|d/2.ts|d/10.ts",
                "-c",
                "copy",
                "-bsf:a",
                "aac_adtstoasc",
                "-y",
                "d/out.mp4",
            ]
        );
    }

    #[tokio::test]
    async fn successful_exit_is_ok() {
        // `true` ignores its arguments and exits 0, standing in for ffmpeg.
        let concat = FfmpegConcatenator::new("true");
        let segments = vec![PathBuf::from("1.ts")];
        concat
            .concatenate(&segments, Path::new("out.mp4"))
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn nonzero_exit_surfaces_as_external_tool_error() {
        let concat = FfmpegConcatenator::new("false");
        let segments = vec![PathBuf::from("1.ts")];
        let err = concat
            .concatenate(&segments, Path::new("out.mp4"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::ExternalTool { .. }));
    }

    #[tokio::test]
    async fn missing_binary_surfaces_as_external_tool_error() {
        let concat = FfmpegConcatenator::new("definitely-not-a-real-ffmpeg");
        let err = concat
            .concatenate(&[PathBuf::from("1.ts")], Path::new("out.mp4"))
            .await
            .unwrap_err();
        match err {
            Error::ExternalTool { detail } => assert!(detail.contains("failed to launch")),
            other => panic!("expected ExternalTool, got {other:?}"),
        }
    }
}
