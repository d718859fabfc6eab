use docmatch_core::report::{DocumentRow, OverlapReport, SentenceReport, SimilarityReport, WordReport};

/// One line per document: position, headline, topic and body excerpt.
pub fn table(rows: &Vec<DocumentRow>) -> String {
    let mut out = format!("{:>5}  {:<30}  {:<15}  {}\n", "#", "headline", "topic", "body");
    for r in rows {
        out.push_str(&format!(
            "{:>5}  {:<30}  {:<15}  {}\n",
            r.position,
            clip(&r.headline, 30),
            clip(&r.topic, 15),
            r.excerpt.replace('\n', " ")
        ));
    }
    out.push_str(&format!("{} documents", rows.len()));
    out
}

pub fn word(r: &WordReport) -> String {
    if r.found {
        format!("Results for '{}':\n  headline:  {}\n  frequency: {}", r.query, r.headline, r.frequency)
    } else {
        format!("Results for '{}':\n  the word was not found in any document", r.query)
    }
}

pub fn sentence(r: &SentenceReport) -> String {
    let similarity = match &r.similarity {
        SimilarityReport::Found { headline, topic, similarity, body_excerpt, .. } => format!(
            "Most similar body by cosine similarity: {headline} (similarity: {similarity:.4})\n  topic: {topic}\n  body:  {body_excerpt}"
        ),
        SimilarityReport::NoDocuments { notice } => format!("warning: {notice}"),
    };
    let overlap = match &r.overlap {
        OverlapReport::Found { total_score, topic, headline, .. } => format!(
            "Sum of sentence token frequencies: {total_score}\n  topic:    {topic}\n  headline: {headline}"
        ),
        OverlapReport::NoValidTokens { notice } | OverlapReport::NoMatch { notice } => notice.clone(),
    };
    format!("{similarity}\n{overlap}")
}

fn clip(s: &str, width: usize) -> String {
    if s.chars().count() <= width {
        return s.to_string();
    }
    let mut out: String = s.chars().take(width.saturating_sub(1)).collect();
    out.push('…');
    out
}
