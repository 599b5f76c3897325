/// Weights of the cosine and keyword-overlap percentages in the blend.
#[derive(Debug, Clone, Copy)]
pub struct ScoreWeights {
    pub cosine: f64,
    pub keyword_overlap: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            cosine: 0.4,
            keyword_overlap: 0.6,
        }
    }
}

impl ScoreWeights {
    pub fn blend(&self, cosine: f64, keyword_overlap: f64) -> f64 {
        cosine * self.cosine + keyword_overlap * self.keyword_overlap
    }
}

/// Presentation curve applied to blended scores strictly above `threshold`:
/// `min(ceiling, score * multiplier + offset)`. Scores at or below the
/// threshold pass through untouched, so the curve jumps at the threshold.
#[derive(Debug, Clone, Copy)]
pub struct BoostCurve {
    pub threshold: f64,
    pub multiplier: f64,
    pub offset: f64,
    pub ceiling: f64,
}

impl BoostCurve {
    pub const TFIDF: BoostCurve = BoostCurve {
        threshold: 30.0,
        multiplier: 1.5,
        offset: 15.0,
        ceiling: 98.0,
    };

    pub const BAG_OF_WORDS: BoostCurve = BoostCurve {
        threshold: 15.0,
        multiplier: 1.5,
        offset: 10.0,
        ceiling: 98.0,
    };

    pub fn apply(&self, score: f64) -> f64 {
        if score > self.threshold {
            (score * self.multiplier + self.offset).min(self.ceiling)
        } else {
            score
        }
    }
}

/// Rounds to one decimal place, half to even on the exact binary value.
///
/// Goes through float formatting rather than `(x * 10).round()`: the
/// multiplication can push a value stored just below `.x5` up onto the tie.
pub fn round_to_tenth(score: f64) -> f64 {
    format!("{score:.1}").parse().unwrap_or(score)
}
