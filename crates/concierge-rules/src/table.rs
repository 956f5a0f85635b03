//! The ordered rule table and the classifier entry point.
//!
//! Rules are evaluated top-to-bottom and the first match wins; later rules
//! are never consulted. Arabic-scoped rules sit first and are only eligible
//! when the raw input contains Arabic-script characters, which makes script
//! precedence fall out of plain table order. The final rule matches
//! unconditionally, so [`classify`] is total: any input in either display
//! language yields a reply.

use std::sync::LazyLock;

use regex::Regex;

use concierge_core::{Lang, script};

use crate::catalog;
use crate::matcher::Matcher;
use crate::reply::Reply;

/// Which inputs a rule is eligible for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RuleScope {
    /// Eligible for any input.
    Any,
    /// Only eligible when the input contains Arabic-script characters.
    ArabicScript,
}

/// One entry of the ordered rule table.
#[derive(Debug)]
pub struct Rule {
    /// Stable rule name, used in debug logs and tests.
    pub name: &'static str,
    /// Eligibility gate, checked before the matcher.
    pub scope: RuleScope,
    /// Predicate over the normalized input.
    pub matcher: Matcher,
    /// Reply builder, parameterized by the active display language.
    pub respond: fn(Lang) -> Reply,
}

impl Rule {
    fn any(name: &'static str, matcher: Matcher, respond: fn(Lang) -> Reply) -> Self {
        Self {
            name,
            scope: RuleScope::Any,
            matcher,
            respond,
        }
    }

    fn arabic(name: &'static str, matcher: Matcher, respond: fn(Lang) -> Reply) -> Self {
        Self {
            name,
            scope: RuleScope::ArabicScript,
            matcher,
            respond,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyword sets
// ─────────────────────────────────────────────────────────────────────────────

const AR_GREETING: &[&str] = &["سلام", "مرحبا", "اهلا"];
const AR_PRICING: &[&str] = &["خدم", "سعر", "ثمن", "كم"];
const AR_CONTACT: &[&str] = &["اتصال", "تواصل", "هاتف"];

const KW_SERVICES: &[&str] = &["service"];
const KW_PRICING: &[&str] = &["prix", "price", "tarif", "cout", "combien", "dh", "dirham"];
const KW_CONTACT: &[&str] = &["contact", "email", "téléphone", "phone"];
const KW_ABOUT: &[&str] = &["about", "propos", "qui", "who", "codemarket"];
const KW_PORTFOLIO: &[&str] = &["portfolio", "réalisation", "achievement", "projet", "project"];
const KW_LOGO: &[&str] = &["logo"];
const KW_WEBSITE: &[&str] = &["site", "web", "website"];
const KW_PRESENTATION: &[&str] = &["présentation", "presentation", "powerpoint", "ppt"];
const KW_REPORT: &[&str] = &["rapport", "report", "stage", "internship"];
const KW_DATABASE: &[&str] = &["base", "database", "données", "data"];
const KW_MOBILE: &[&str] = &["mobile", "app", "android", "ios"];
const KW_THANKS: &[&str] = &["merci", "thank"];
const KW_FAREWELL: &[&str] = &["bye", "au revoir", "à bientôt"];
const KW_HELP: &[&str] = &["aide", "help"];
const KW_SOCIAL: &[&str] = &["instagram", "insta", "social"];
const KW_DELIVERY: &[&str] = &["délai", "delivery", "time", "combien de temps", "quand"];
const KW_PAYMENT: &[&str] = &["paiement", "payment", "payer", "pay"];

/// Greeting words must open the message. Only the start anchor is checked,
/// so "hi there" greets and so does "history".
const GREETING_PATTERN: &str = "^(hi|hello|hey|salut|bonjour|bonsoir|coucou)";

// ─────────────────────────────────────────────────────────────────────────────
// The table
// ─────────────────────────────────────────────────────────────────────────────

static RULES: LazyLock<Vec<Rule>> = LazyLock::new(build_table);

fn build_table() -> Vec<Rule> {
    let greeting_re =
        Regex::new(GREETING_PATTERN).expect("greeting pattern is a valid static regex");
    vec![
        // Arabic-scoped rules first: script detection outranks keywords.
        Rule::arabic("arabic_greeting", Matcher::Keywords(AR_GREETING), catalog::arabic_greeting),
        Rule::arabic("arabic_pricing", Matcher::Keywords(AR_PRICING), catalog::arabic_pricing),
        Rule::arabic("arabic_contact", Matcher::Keywords(AR_CONTACT), catalog::arabic_contact),
        Rule::arabic("arabic_fallback", Matcher::Always, catalog::arabic_fallback),
        // Latin greeting, anchored at the start of the message.
        Rule::any("greeting", Matcher::Pattern(greeting_re), catalog::greeting),
        // Keyword categories in the widget's fixed order.
        Rule::any("services", Matcher::Keywords(KW_SERVICES), catalog::services),
        Rule::any("pricing", Matcher::Keywords(KW_PRICING), catalog::pricing),
        Rule::any("contact", Matcher::Keywords(KW_CONTACT), catalog::contact),
        Rule::any("about", Matcher::Keywords(KW_ABOUT), catalog::about),
        Rule::any("portfolio", Matcher::Keywords(KW_PORTFOLIO), catalog::portfolio),
        Rule::any("logo", Matcher::Keywords(KW_LOGO), catalog::logo),
        Rule::any("website", Matcher::Keywords(KW_WEBSITE), catalog::website),
        Rule::any("presentation", Matcher::Keywords(KW_PRESENTATION), catalog::presentation),
        Rule::any("report", Matcher::Keywords(KW_REPORT), catalog::report),
        Rule::any("database", Matcher::Keywords(KW_DATABASE), catalog::database),
        Rule::any("mobile", Matcher::Keywords(KW_MOBILE), catalog::mobile),
        // Social sentiment.
        Rule::any("thanks", Matcher::Keywords(KW_THANKS), catalog::thanks),
        Rule::any("farewell", Matcher::Keywords(KW_FAREWELL), catalog::farewell),
        // Meta inquiries.
        Rule::any("help", Matcher::Keywords(KW_HELP), catalog::help),
        Rule::any("instagram", Matcher::Keywords(KW_SOCIAL), catalog::instagram),
        Rule::any("delivery", Matcher::Keywords(KW_DELIVERY), catalog::delivery),
        Rule::any("payment", Matcher::Keywords(KW_PAYMENT), catalog::payment),
        // Unconditional catch-all. Guarantees totality.
        Rule::any("default", Matcher::Always, catalog::fallback),
    ]
}

/// The ordered rule table. Exposed for inspection and tests.
#[must_use]
pub fn rules() -> &'static [Rule] {
    &RULES
}

/// Classify free-text input into a canned reply.
///
/// Pure function of `(input, lang)` and the static table: no I/O, no caller
/// state. Matching runs on the lowercased input; Arabic-script detection
/// runs on the raw input and gates the Arabic-scoped rules.
#[must_use]
pub fn classify(input: &str, lang: Lang) -> Reply {
    let normalized = script::normalize(input);
    let arabic = script::contains_arabic(input);

    let rule = RULES
        .iter()
        .filter(|rule| rule.scope == RuleScope::Any || arabic)
        .find(|rule| rule.matcher.matches(&normalized))
        .expect("rule table ends in an unconditional catch-all");

    tracing::debug!(rule = rule.name, lang = %lang, "classified input");
    (rule.respond)(lang)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn winning_rule(input: &str) -> &'static str {
        let normalized = script::normalize(input);
        let arabic = script::contains_arabic(input);
        rules()
            .iter()
            .filter(|rule| rule.scope == RuleScope::Any || arabic)
            .find(|rule| rule.matcher.matches(&normalized))
            .map(|rule| rule.name)
            .unwrap()
    }

    // --- Table shape ---

    #[test]
    fn table_order_is_fixed() {
        let names: Vec<&str> = rules().iter().map(|r| r.name).collect();
        assert_eq!(
            names,
            [
                "arabic_greeting",
                "arabic_pricing",
                "arabic_contact",
                "arabic_fallback",
                "greeting",
                "services",
                "pricing",
                "contact",
                "about",
                "portfolio",
                "logo",
                "website",
                "presentation",
                "report",
                "database",
                "mobile",
                "thanks",
                "farewell",
                "help",
                "instagram",
                "delivery",
                "payment",
                "default",
            ]
        );
    }

    #[test]
    fn last_rule_is_unconditional_catch_all() {
        let last = rules().last().unwrap();
        assert_eq!(last.scope, RuleScope::Any);
        assert!(matches!(last.matcher, Matcher::Always));
    }

    #[test]
    fn only_leading_rules_are_arabic_scoped() {
        let arabic_count = rules()
            .iter()
            .take_while(|r| r.scope == RuleScope::ArabicScript)
            .count();
        assert_eq!(arabic_count, 4);
        assert!(
            rules()[arabic_count..]
                .iter()
                .all(|r| r.scope == RuleScope::Any)
        );
    }

    // --- Script precedence ---

    #[test]
    fn arabic_greeting_token() {
        assert_eq!(winning_rule("سلام"), "arabic_greeting");
        assert_eq!(winning_rule("مرحبا بكم"), "arabic_greeting");
    }

    #[test]
    fn arabic_pricing_token() {
        assert_eq!(winning_rule("كم سعر الموقع"), "arabic_pricing");
    }

    #[test]
    fn arabic_contact_token() {
        let reply = classify("اتصال", Lang::En);
        assert!(reply.text.contains("codemarket@gmail.com"));
        assert!(reply.links.iter().any(|l| l.external));
    }

    #[test]
    fn arabic_thanks_falls_to_arabic_fallback_not_latin_thanks() {
        // "شكرا" matches no Arabic keyword rule; script precedence keeps it
        // away from the Latin table entirely.
        assert_eq!(winning_rule("شكرا"), "arabic_fallback");
        let reply = classify("شكرا", Lang::En);
        assert!(reply.text.contains("شكرا لرسالتك"));
    }

    #[test]
    fn mixed_script_resolves_via_arabic_branch() {
        // Contains both the Latin "price" keyword and Arabic script.
        assert_eq!(winning_rule("price سعر"), "arabic_pricing");
        // A single Arabic character is enough to keep the Latin "logo"
        // keyword from ever being consulted.
        assert_eq!(winning_rule("logo ب"), "arabic_fallback");
    }

    // --- Greeting ---

    #[test]
    fn bonjour_in_french() {
        let reply = classify("bonjour", Lang::Fr);
        assert!(reply.text.contains("Bonjour"));
        let targets: Vec<&str> = reply.links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, ["/services", "/#contact"]);
    }

    #[test]
    fn hello_in_english() {
        let reply = classify("Hello!", Lang::En);
        assert!(reply.text.contains("Welcome to CodeMarket"));
    }

    #[test]
    fn greeting_is_anchored() {
        // "hi" mid-sentence must not trigger the greeting rule.
        assert_eq!(winning_rule("oh hi there"), "default");
        // ...but a message that merely opens with a greeting word does.
        assert_eq!(winning_rule("hey, what do you offer"), "greeting");
    }

    #[test]
    fn greeting_outranks_keywords() {
        // "bonjour" wins even though "prix" appears later in the message.
        assert_eq!(winning_rule("bonjour, vos prix ?"), "greeting");
    }

    // --- Keyword categories ---

    #[test]
    fn pricing_precedes_logo() {
        // Both "prix" and "logo" are present; the pricing rule sits earlier
        // in the fixed order, so the generic price table wins.
        let reply = classify("Quel est le prix d'un logo?", Lang::Fr);
        assert_eq!(winning_rule("Quel est le prix d'un logo?"), "pricing");
        assert!(reply.text.contains("Nos Tarifs"));
    }

    #[test]
    fn logo_alone_gets_logo_reply() {
        let reply = classify("I need a logo", Lang::En);
        assert!(reply.text.contains("Logo Creation"));
        assert_eq!(reply.links.len(), 1);
    }

    #[test]
    fn services_localized() {
        assert!(classify("your services?", Lang::En).text.contains("Our Services"));
        assert!(classify("vos services?", Lang::Fr).text.contains("Nos Services"));
    }

    #[test]
    fn services_precede_pricing() {
        // "service" and "tarif" both present; services is evaluated first.
        assert_eq!(winning_rule("tarifs de vos services"), "services");
    }

    #[test]
    fn category_samples() {
        assert_eq!(winning_rule("who are you"), "about");
        assert_eq!(winning_rule("show me your portfolio"), "portfolio");
        assert_eq!(winning_rule("can you make a website"), "website");
        assert_eq!(winning_rule("powerpoint deck"), "presentation");
        assert_eq!(winning_rule("rapport de stage"), "report");
        assert_eq!(winning_rule("database design"), "database");
        assert_eq!(winning_rule("android or ios"), "mobile");
    }

    #[test]
    fn accented_keywords_match() {
        assert_eq!(winning_rule("numéro de téléphone"), "contact");
        assert_eq!(winning_rule("vos réalisations"), "portfolio");
        assert_eq!(winning_rule("quel délai de livraison"), "delivery");
    }

    // --- Social sentiment and meta ---

    #[test]
    fn thanks_has_no_links() {
        let reply = classify("thank you so much", Lang::En);
        assert!(reply.text.contains("You're welcome"));
        assert!(reply.links.is_empty());
    }

    #[test]
    fn farewell_has_no_links() {
        let reply = classify("au revoir", Lang::Fr);
        assert!(reply.text.contains("Au revoir"));
        assert!(reply.links.is_empty());
    }

    #[test]
    fn help_offers_capability_menu() {
        let reply = classify("can you help me", Lang::En);
        assert!(reply.text.contains("How can I help you?"));
        assert_eq!(reply.links.len(), 2);
    }

    #[test]
    fn instagram_reply_links_externally() {
        let reply = classify("do you have an insta account", Lang::En);
        assert!(reply.links[0].external);
    }

    #[test]
    fn delivery_and_payment() {
        assert_eq!(winning_rule("how long is delivery"), "delivery");
        assert_eq!(winning_rule("quels modes de paiement"), "payment");
    }

    // --- Default fallback ---

    #[test]
    fn gibberish_hits_default_with_three_links() {
        let reply = classify("asdkjasdkj", Lang::En);
        assert_eq!(winning_rule("asdkjasdkj"), "default");
        let targets: Vec<&str> = reply.links.iter().map(|l| l.target.as_str()).collect();
        assert_eq!(targets, ["/services", "/#contact", "/achievements"]);
    }

    #[test]
    fn empty_input_still_gets_a_reply() {
        // The session layer never submits blank input, but the classifier
        // stays total anyway.
        let reply = classify("", Lang::Fr);
        assert!(!reply.text.is_empty());
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(winning_rule("PRIX"), "pricing");
        assert_eq!(winning_rule("BONJOUR tout le monde"), "greeting");
    }

    // --- Properties ---

    proptest! {
        #[test]
        fn classify_is_total(input in ".*", fr in proptest::bool::ANY) {
            let lang = if fr { Lang::Fr } else { Lang::En };
            let reply = classify(&input, lang);
            prop_assert!(!reply.text.is_empty());
        }

        #[test]
        fn classify_is_idempotent(input in ".*", fr in proptest::bool::ANY) {
            let lang = if fr { Lang::Fr } else { Lang::En };
            prop_assert_eq!(classify(&input, lang), classify(&input, lang));
        }

        #[test]
        fn arabic_script_never_reaches_latin_rules(input in "[\u{0600}-\u{06FF}]{1,40}") {
            let name = winning_rule(&input);
            prop_assert!(name.starts_with("arabic_"), "rule was {}", name);
        }
    }
}
