//! Span decoding over start/end logit distributions

/// Inclusive token range of a predicted answer; `end >= start` always
/// holds after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSpan {
    pub start: usize,
    pub end: usize,
}

impl TokenSpan {
    pub fn token_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Decode the highest-scoring span from start/end logits.
///
/// The model occasionally predicts an end position before the start;
/// that degenerate case is clamped to a single-token span instead of
/// being treated as a failure. Returns `None` only for empty logits.
pub fn best_span(start_logits: &[f32], end_logits: &[f32]) -> Option<TokenSpan> {
    let start = argmax(start_logits)?;
    let end = argmax(end_logits)?;
    Some(TokenSpan {
        start,
        end: end.max(start),
    })
}

/// Index of the first maximum value
fn argmax(logits: &[f32]) -> Option<usize> {
    let mut best: Option<(usize, f32)> = None;
    for (i, &value) in logits.iter().enumerate() {
        match best {
            Some((_, best_value)) if value <= best_value => {}
            _ => best = Some((i, value)),
        }
    }
    best.map(|(i, _)| i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_span_normal() {
        let start = [0.1, 5.0, 0.2, 0.3];
        let end = [0.1, 0.2, 7.0, 0.3];
        let span = best_span(&start, &end).unwrap();
        assert_eq!(span, TokenSpan { start: 1, end: 2 });
        assert_eq!(span.token_count(), 2);
    }

    #[test]
    fn test_best_span_degenerate_clamps_to_single_token() {
        let start = [0.0, 0.0, 9.0, 0.0];
        let end = [8.0, 0.0, 0.0, 0.0];
        let span = best_span(&start, &end).unwrap();
        assert_eq!(span, TokenSpan { start: 2, end: 2 });
        assert_eq!(span.token_count(), 1);
    }

    #[test]
    fn test_best_span_empty_logits() {
        assert!(best_span(&[], &[]).is_none());
    }

    #[test]
    fn test_argmax_first_max_wins() {
        assert_eq!(argmax(&[1.0, 3.0, 3.0, 2.0]), Some(1));
    }

    #[test]
    fn test_argmax_all_equal() {
        assert_eq!(argmax(&[0.5, 0.5, 0.5]), Some(0));
    }
}
