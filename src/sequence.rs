use crate::error::Error;

/// Extension appended to every generated URL, regardless of what the boundary
/// filenames carried.
const SEGMENT_EXT: &str = ".ts";

/// A numbered segment sequence inferred from its first and last filename.
///
/// The digit width and padding mode come from the start filename alone:
/// `007.ts` means "pad to 3 digits", `7.ts` means "no padding". Immutable
/// once constructed.
#[derive(Debug, Clone)]
pub struct SequenceSpec {
    base_url: String,
    start_number: u64,
    end_number: u64,
    digit_width: usize,
    zero_padded: bool,
}

fn numeric_prefix(filename: &str) -> Result<&str, Error> {
    let prefix = match filename.split_once('.') {
        Some((prefix, _)) => prefix,
        None => filename,
    };
    if prefix.is_empty() || !prefix.bytes().all(|b| b.is_ascii_digit()) {
        return Err(Error::Parse {
            name: filename.to_string(),
            reason: "expected a filename of the form <digits>.<ext>".to_string(),
        });
    }
    Ok(prefix)
}

fn parse_number(filename: &str, prefix: &str) -> Result<u64, Error> {
    prefix.parse::<u64>().map_err(|err| Error::Parse {
        name: filename.to_string(),
        reason: format!("numeric prefix out of range: {}", err),
    })
}

impl SequenceSpec {
    pub fn from_filenames(
        base_url: &str,
        start_filename: &str,
        end_filename: &str,
    ) -> Result<Self, Error> {
        let start_prefix = numeric_prefix(start_filename)?;
        let end_prefix = numeric_prefix(end_filename)?;

        Ok(SequenceSpec {
            base_url: base_url.to_string(),
            start_number: parse_number(start_filename, start_prefix)?,
            end_number: parse_number(end_filename, end_prefix)?,
            digit_width: start_prefix.len(),
            zero_padded: start_prefix.starts_with('0'),
        })
    }

    /// Candidate URLs in ascending numeric order. An inverted range
    /// (end < start) yields an empty list rather than an error.
    pub fn urls(&self) -> Vec<String> {
        (self.start_number..=self.end_number)
            .map(|n| {
                if self.zero_padded {
                    format!(
                        "{}{:0width$}{}",
                        self.base_url,
                        n,
                        SEGMENT_EXT,
                        width = self.digit_width
                    )
                } else {
                    format!("{}{}{}", self.base_url, n, SEGMENT_EXT)
                }
            })
            .collect()
    }
}
