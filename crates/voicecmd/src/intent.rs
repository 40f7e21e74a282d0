//! Intent classification over ordered per-language pattern tables.
//!
//! Each table is an explicit ordered list of `(action, pattern)` rules
//! evaluated in a single pass, first match wins. Ordering is load-bearing
//! configuration: specific forms ("complete todo: X", "mark X as not done",
//! filter phrasings) precede the general catch-alls that would otherwise
//! swallow them, and tests assert the precedence. Multi-intent utterances
//! resolve to the earliest rule by policy.
//!
//! Patterns compile case-insensitively so extracted fragments keep the
//! speaker's casing. The Urdu table carries native-script forms (both SOV
//! verb-final and colon-prefixed) alongside Roman-Urdu transliterations.

use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use tracing::debug;

use crate::command::{Language, VoiceAction, VoiceCommand};

/// Confidence assigned to any pattern match; `Unknown` carries 0.0.
pub const MATCH_CONFIDENCE: f32 = 0.9;

fn compile(table: &[(VoiceAction, &str)]) -> Vec<(VoiceAction, Regex)> {
    table
        .iter()
        .map(|(action, pattern)| {
            let regex = RegexBuilder::new(pattern)
                .case_insensitive(true)
                .build()
                .expect("intent pattern must compile");
            (*action, regex)
        })
        .collect()
}

static ENGLISH_PATTERNS: Lazy<Vec<(VoiceAction, Regex)>> = Lazy::new(|| {
    use VoiceAction::*;
    compile(&[
        // Filters before the bare list catch-all
        (
            FilterCompleted,
            r"^(?:show|list|display)\s+(?:all\s+)?(?:my\s+)?(?:completed|done|finished)(?:\s+(?:todos?|tasks?|items?))?$",
        ),
        (
            FilterPending,
            r"^(?:show|list|display)\s+(?:all\s+)?(?:my\s+)?(?:pending|incomplete|unfinished|remaining|open)(?:\s+(?:todos?|tasks?|items?))?$",
        ),
        (
            List,
            r"^(?:show|list|display)\s+(?:all\s+)?(?:my\s+)?(?:todos?|tasks?|list|everything)$",
        ),
        (List, r"^what(?:'s|\s+is)\s+on\s+my\s+list$"),
        (Search, r"^(?:search|find)\s+(?:for\s+)?(.+)$"),
        // Explicit "… todo: X" forms before bare-verb forms
        (
            Create,
            r"^(?:add|create|new)\s+(?:a\s+)?(?:todo|task|item)(?:\s*[:,]\s*|\s+)(.+)$",
        ),
        (Create, r"^remind\s+me\s+to\s+(.+)$"),
        (
            Complete,
            r"^(?:complete|finish)\s+(?:todo|task)(?:\s*[:,]\s*|\s+)(.+)$",
        ),
        // "not done" must outrank the "done" form below it
        (
            Uncomplete,
            r"^mark\s+(.+?)\s+(?:as\s+)?(?:not\s+done|incomplete|pending|undone)$",
        ),
        (
            Complete,
            r"^(?:mark|check)(?:\s+off)?\s+(.+?)\s+(?:as\s+)?(?:done|complete|completed|finished)$",
        ),
        (
            Uncomplete,
            r"^(?:uncomplete|reopen|uncheck|unmark)\s+(?:(?:todo|task)(?:\s*[:,]\s*|\s+))?(.+)$",
        ),
        (
            Delete,
            r"^(?:delete|remove|cancel)\s+(?:todo|task)(?:\s*[:,]\s*|\s+)(.+)$",
        ),
        // General bare-verb fallbacks
        (Complete, r"^(?:complete|finish)\s+(.+)$"),
        (Delete, r"^(?:delete|remove)\s+(.+)$"),
    ])
});

static URDU_PATTERNS: Lazy<Vec<(VoiceAction, Regex)>> = Lazy::new(|| {
    use VoiceAction::*;
    compile(&[
        // Filters before the bare list forms
        (FilterCompleted, r"^(?:تمام\s+|سب\s+)?مکمل(?:\s+شدہ)?\s+کام\s+دکھائیں$"),
        (
            FilterCompleted,
            r"^(?:tamam\s+|sab\s+)?mukammal\s+kaam\s+(?:dikhao|dikhaye|dikhayen)$",
        ),
        (FilterPending, r"^(?:تمام\s+|سب\s+)?(?:باقی|نامکمل)\s+کام\s+دکھائیں$"),
        (
            FilterPending,
            r"^(?:tamam\s+|sab\s+)?(?:baqi|baaqi|namukammal)\s+kaam\s+(?:dikhao|dikhaye|dikhayen)$",
        ),
        (List, r"^(?:تمام\s+|سب\s+|میرے\s+)?کام\s+دکھائیں$"),
        (List, r"^فہرست\s+دکھائیں$"),
        (List, r"^(?:tamam\s+|sab\s+|mere\s+)?kaam\s+(?:dikhao|dikhaye|dikhayen)$"),
        (Search, r"^تلاش\s+کریں\s*[:：]?\s*(.+)$"),
        (Search, r"^(.+?)\s+تلاش\s+کریں$"),
        (Search, r"^talash\s+(?:karo|karein)\s*[:,]?\s*(.+)$"),
        // Colon-prefixed create forms before the SOV form
        (Create, r"^نیا\s+کام\s*[:：]?\s*(.+)$"),
        (Create, r"^کام\s+شامل\s+کریں\s*[:：]?\s*(.+)$"),
        (Create, r"^(.+?)\s+شامل\s+کریں$"),
        (Create, r"^naya\s+kaam\s*[:,]?\s*(.+)$"),
        (Create, r"^kaam\s+shamil\s+(?:karo|karein)\s*[:,]?\s*(.+)$"),
        (Complete, r"^مکمل\s+کریں\s*[:：]\s*(.+)$"),
        (Complete, r"^(.+?)\s+مکمل\s+(?:کریں|کرو|ہو\s+گیا)$"),
        (
            Complete,
            r"^(.+?)\s+mukammal\s+(?:karo|karein|kar\s+do|ho\s+gaya)$",
        ),
        (Uncomplete, r"^(.+?)\s+دوبارہ\s+کھولیں$"),
        (Uncomplete, r"^(.+?)\s+dobara\s+(?:kholo|kholein|khol\s+do)$"),
        (Delete, r"^حذف\s+کریں\s*[:：]\s*(.+)$"),
        (Delete, r"^(.+?)\s+(?:حذف|ڈیلیٹ)\s+کریں$"),
        (Delete, r"^(.+?)\s+مٹا\s+(?:دیں|دو)$"),
        (
            Delete,
            r"^(.+?)\s+(?:hatao|hata\s+do|mita\s+do|delete\s+(?:karo|karein))$",
        ),
    ])
});

/// The ordered rule table for a language. Exposed so hosts and tests can
/// audit rule precedence.
pub fn patterns(language: Language) -> &'static [(VoiceAction, Regex)] {
    match language {
        Language::En => &ENGLISH_PATTERNS,
        Language::Ur => &URDU_PATTERNS,
    }
}

/// Classify a normalized transcript.
///
/// Returns the first matching rule's action with the trimmed first capture
/// group as the title fragment. Never fails: unmatched input, empty input,
/// and target actions whose fragment extraction came up empty all yield
/// `Unknown` with confidence 0.0.
pub fn classify(transcript: &str, language: Language) -> VoiceCommand {
    let trimmed = transcript.trim();
    if trimmed.is_empty() {
        return VoiceCommand::unknown(transcript);
    }

    for (action, regex) in patterns(language) {
        if let Some(caps) = regex.captures(trimmed) {
            let fragment = caps
                .get(1)
                .map(|m| m.as_str().trim().to_string())
                .filter(|f| !f.is_empty());

            // A target action without a usable fragment is not actionable
            if action.needs_match() && fragment.is_none() {
                return VoiceCommand::unknown(transcript);
            }

            debug!(action = ?action, fragment = ?fragment, "Classified transcript");
            return VoiceCommand {
                action: *action,
                title_fragment: fragment,
                confidence: MATCH_CONFIDENCE,
                raw_text: transcript.to_string(),
            };
        }
    }

    debug!(language = %language, "No pattern matched transcript");
    VoiceCommand::unknown(transcript)
}
