use flashbot::news::{FallbackReason, ItemOrigin, ParseStrategy};
use flashbot::{fallback_items, parse_labeled, select_items, NewsItem, ResponseFormat, StrategyChain};

fn item(title: &str, content: &str) -> NewsItem {
    NewsItem::new(title, content)
}

fn labeled(n: usize) -> String {
    (1..=n)
        .map(|i| format!("TITLE: Headline {i}\nCONTENT: Summary {i}.\n\n"))
        .collect()
}

#[test]
fn two_blank_separated_pairs() {
    let items = parse_labeled("TITLE: A\nCONTENT: one\n\nTITLE: B\nCONTENT: two\n");
    assert_eq!(items, vec![item("A", "one"), item("B", "two")]);
}

#[test]
fn six_pairs_truncate_to_first_five() {
    let items = parse_labeled(&labeled(6));
    assert_eq!(items.len(), 5);
    let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
    assert_eq!(
        titles,
        vec!["Headline 1", "Headline 2", "Headline 3", "Headline 4", "Headline 5"]
    );
}

#[test]
fn multi_line_content_is_joined() {
    let items = parse_labeled("TITLE: A\nCONTENT: part one\npart two\n\nTITLE: B\nCONTENT: x");
    assert_eq!(items, vec![item("A", "part one part two"), item("B", "x")]);
}

#[test]
fn title_without_content_contributes_nothing() {
    assert!(parse_labeled("TITLE: Only a headline").is_empty());
    let items = parse_labeled("TITLE: A\nTITLE: B\nCONTENT: two");
    assert_eq!(items, vec![item("B", "two")]);
}

#[test]
fn empty_input_selects_default_set() {
    assert!(parse_labeled("").is_empty());
    let chain = StrategyChain::for_format(ResponseFormat::Labeled);
    let selection = select_items(Ok(String::new()), &chain, 3);
    assert_eq!(selection.items, fallback_items());
}

#[test]
fn two_pairs_below_threshold_select_default_set() {
    let chain = StrategyChain::for_format(ResponseFormat::Labeled);
    let selection = select_items(Ok(labeled(2)), &chain, 3);
    assert_eq!(selection.items.len(), 5);
    assert_eq!(selection.items, fallback_items());
    assert_eq!(
        selection.origin,
        ItemOrigin::Fallback(FallbackReason::InsufficientItems {
            found: 2,
            required: 3
        })
    );
}

#[test]
fn three_pairs_meet_default_threshold() {
    let chain = StrategyChain::for_format(ResponseFormat::Labeled);
    let selection = select_items(Ok(labeled(3)), &chain, 3);
    assert_eq!(selection.origin, ItemOrigin::Parsed(ParseStrategy::Labeled));
    assert_eq!(selection.items[2], item("Headline 3", "Summary 3."));
}

#[test]
fn realistic_model_reply() {
    let reply = "Here are today's top 5 fintech news items for India:\n\n\
        **1. TITLE:** UPI Crosses 15 Billion Monthly Transactions in Record Surge\n\
        **CONTENT:** NPCI data shows UPI processed 15.2 billion transactions worth ₹21 lakh crore.\n\
        Growth was driven by merchant payments.\n\n\
        **2. TITLE:** RBI Tightens Digital Lending Norms for NBFC Partnerships\n\
        **CONTENT:** New rules cap default loss guarantees at 5%.\n\n\
        3. TITLE: Zerodha Launches Mutual Fund Platform for Retail Investors\n\
        CONTENT: The broker's new app targets 10 million users.\n";
    let items = parse_labeled(reply);
    assert_eq!(items.len(), 3);
    assert_eq!(
        items[0].title,
        "UPI Crosses 15 Billion Monthly Transactions in Record Surge"
    );
    assert_eq!(
        items[0].content,
        "NPCI data shows UPI processed 15.2 billion transactions worth ₹21 lakh crore. Growth was driven by merchant payments."
    );
    assert_eq!(items[1].content, "New rules cap default loss guarantees at 5%.");
    assert_eq!(items[2].title, "Zerodha Launches Mutual Fund Platform for Retail Investors");
}

#[test]
fn fenced_json_reply() {
    let reply = "```json\n{\n  \"news\": [\n    {\"title\": \"PhonePe IPO\", \"content\": \"Files DRHP.\", \"category\": \"Payments\"},\n    {\"title\": \"CRED Mint\", \"content\": \"P2P lending update.\", \"category\": \"Lending\"},\n    {\"title\": \"Jio Finance\", \"content\": \"Launches UPI app.\", \"category\": \"Payments\"}\n  ]\n}\n```";
    let chain = StrategyChain::for_format(ResponseFormat::Json);
    let selection = select_items(Ok(reply.to_string()), &chain, 3);
    assert_eq!(selection.origin, ItemOrigin::Parsed(ParseStrategy::Json));
    assert_eq!(
        selection.items[1],
        item("CRED Mint", "P2P lending update.").with_category("Lending")
    );
}
