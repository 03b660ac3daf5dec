//! Language listing endpoints.

use crate::context::CallContext;
use crate::transport::HttpTransport;
use crate::types::LanguageInfo;
use crate::Result;

pub struct Languages<'a> {
    transport: &'a HttpTransport,
}

impl<'a> Languages<'a> {
    pub(crate) fn new(transport: &'a HttpTransport) -> Self {
        Self { transport }
    }

    /// Languages accepted as dubbing / TTS input.
    pub async fn source_languages(&self, ctx: &CallContext) -> Result<Vec<LanguageInfo>> {
        self.list(ctx, "/source-languages").await
    }

    /// Languages accepted as dubbing output.
    pub async fn target_languages(&self, ctx: &CallContext) -> Result<Vec<LanguageInfo>> {
        self.list(ctx, "/target-languages").await
    }

    async fn list(&self, ctx: &CallContext, path: &str) -> Result<Vec<LanguageInfo>> {
        let resp = self.transport.get(ctx, path, &[]).await?;
        let resp = self.transport.check_status(ctx, resp, |s| s.is_success()).await?;
        self.transport.read_json(ctx, resp).await
    }
}

/// Find a listed language by its short name (`en-us`), case-insensitively.
pub fn find_by_short_name<'l>(languages: &'l [LanguageInfo], short_name: &str) -> Option<&'l LanguageInfo> {
    languages
        .iter()
        .find(|l| l.short_name.eq_ignore_ascii_case(short_name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::LanguageId;

    #[test]
    fn short_name_lookup_ignores_case() {
        let langs = vec![
            LanguageInfo {
                id: LanguageId(1),
                language: "English (United States)".into(),
                short_name: "en-us".into(),
            },
            LanguageInfo {
                id: LanguageId(76),
                language: "French (France)".into(),
                short_name: "fr-fr".into(),
            },
        ];
        assert_eq!(find_by_short_name(&langs, "FR-FR").map(|l| l.id), Some(LanguageId(76)));
        assert!(find_by_short_name(&langs, "de-de").is_none());
    }
}
