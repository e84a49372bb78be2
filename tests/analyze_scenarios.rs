// tests/analyze_scenarios.rs
// Hand-picked end-to-end scenarios through the public `analyze` entry point.

use news_sentiment_analyzer::analyze::FALLBACK_REASONING;
use news_sentiment_analyzer::{analyze, score_text, Recommendation};

fn assert_sums_to_100(text: &str) {
    let r = analyze(text);
    let sum = r.buy_percent + r.hold_percent + r.sell_percent;
    assert!((sum - 100.0).abs() <= 0.1, "sum {sum} for {text:?}");
}

#[test]
fn empty_text_is_neutral_buy_with_fallback() {
    let r = analyze("");
    assert_eq!(r.buy_percent, 33.33);
    assert_eq!(r.hold_percent, 33.33);
    assert_eq!(r.sell_percent, 33.33);
    assert_eq!(r.recommendation, Recommendation::Buy);
    assert_eq!(r.reasoning, FALLBACK_REASONING);
}

#[test]
fn punctuation_only_takes_the_neutral_path() {
    let r = analyze("... --- !!! ???");
    assert_eq!(
        (r.buy_percent, r.hold_percent, r.sell_percent),
        (33.33, 33.33, 33.33)
    );
    assert_eq!(r.reasoning, FALLBACK_REASONING);
}

#[test]
fn plain_decline_is_a_full_sell() {
    let r = analyze("The stock declined sharply.");
    assert_eq!(r.buy_percent, 0.0);
    assert_eq!(r.hold_percent, 0.0);
    assert_eq!(r.sell_percent, 100.0);
    assert_eq!(r.recommendation, Recommendation::Sell);
    assert_eq!(r.reasoning, "The stock declined sharply");
}

#[test]
fn record_high_and_beat_is_a_full_buy() {
    let r = analyze("Shares hit record high as the company beat expectations.");
    assert_eq!(r.buy_percent, 100.0);
    assert_eq!(r.recommendation, Recommendation::Buy);
    assert_eq!(
        r.reasoning,
        "Shares hit record high as the company beat expectations"
    );
}

#[test]
fn steady_outlook_is_hold() {
    let r = analyze("The outlook remains stable and steady overall.");
    assert_eq!(r.hold_percent, 100.0);
    assert_eq!(r.recommendation, Recommendation::Hold);
    assert_eq!(r.reasoning, "The outlook remains stable and steady overall");
}

#[test]
fn negation_lowers_net_buy_contribution() {
    let negated = score_text("The company did not see growth this quarter.");
    let plain = score_text("The company saw growth this quarter.");
    assert!(
        negated.buy < plain.buy,
        "negated {} vs plain {}",
        negated.buy,
        plain.buy
    );
    assert!(negated.sell > plain.sell);
}

#[test]
fn short_sentences_are_never_reasoning() {
    let text = "Stock up. The company reported strong growth in quarterly revenue.";
    let r = analyze(text);
    assert!(!r.reasoning.contains("Stock up"), "{}", r.reasoning);
    assert_eq!(
        r.reasoning,
        "The company reported strong growth in quarterly revenue"
    );
}

#[test]
fn analyst_talk_is_excluded_from_reasoning() {
    let text = "Analysts upgraded the stock after strong growth. \
                We recommend caution on the shares this week. \
                The company reported 15% revenue growth to $4 billion. \
                Its recommendation engine business also expanded.";
    let r = analyze(text);
    let lower = r.reasoning.to_lowercase();
    for term in ["analyst", "recommendation", "recommend"] {
        assert!(!lower.contains(term), "{term} leaked into {:?}", r.reasoning);
    }
    assert!(r.reasoning.starts_with("The company reported 15% revenue growth"));
}

#[test]
fn reasoning_uses_at_most_three_sentences_in_rank_order() {
    let text = "Nvidia shares rose 4% after the company reported record data center revenue. \
                Margins expanded again this quarter. \
                Demand for accelerators remains strong across cloud providers. \
                The market cap now exceeds 3 trillion dollars. \
                Executives thanked their partners at the event.";
    let r = analyze(text);
    assert_eq!(r.recommendation, Recommendation::Buy);
    // market cap (15) > Nvidia (13) > margins (2, earlier than "Demand" at 2)
    assert_eq!(
        r.reasoning,
        "The market cap now exceeds 3 trillion dollars \
         Nvidia shares rose 4% after the company reported record data center revenue \
         Margins expanded again this quarter"
    );
    assert_sums_to_100(text);
}

#[test]
fn repeated_calls_are_identical() {
    let text = "Revenue did not decline, but margins were under pressure. Wait and see.";
    let a = serde_json::to_string(&analyze(text)).unwrap();
    let b = serde_json::to_string(&analyze(text)).unwrap();
    assert_eq!(a, b);
}

#[test]
fn result_serializes_to_the_public_shape() {
    let v = serde_json::to_value(analyze("The stock declined sharply.")).unwrap();
    let obj = v.as_object().unwrap();
    let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec!["buy_percent", "hold_percent", "reasoning", "recommendation", "sell_percent"]
    );
    assert_eq!(v["recommendation"], "SELL");
    assert_eq!(v["sell_percent"], 100.0);
}
