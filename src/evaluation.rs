use std::collections::BTreeMap;
use std::fmt;

/// Label-wise performance values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LabelMeasure {
    /// Number of correct predictions.
    pub num_correct: usize,
    /// Number of occurrences of the label in the gold-standard data.
    pub num_observation: usize,
    /// Number of predictions.
    pub num_prediction: usize,
    pub precision: f64,
    pub recall: f64,
    /// F1 score.
    pub fmeasure: f64,
}

/// Overall performance of predicted tag sequences against gold ones
#[derive(Debug, Clone, Default)]
pub struct Evaluation {
    labels: BTreeMap<String, LabelMeasure>,

    /// Number of correctly predicted items.
    pub item_total_correct: usize,
    /// Total number of items.
    pub item_total_num: usize,
    /// Item-level accuracy.
    pub item_accuracy: f64,

    /// Number of correctly predicted instances.
    pub inst_total_correct: usize,
    /// Total number of instances.
    pub inst_total_num: usize,
    /// Instance-level accuracy.
    pub inst_accuracy: f64,

    pub macro_precision: f64,
    pub macro_recall: f64,
    pub macro_fmeasure: f64,
}

impl Evaluation {
    /// Count one sentence
    pub fn accumulate<G, P>(&mut self, gold: &[G], predicted: &[P])
    where
        G: AsRef<str>,
        P: AsRef<str>,
    {
        let mut matched = 0;
        for (g, p) in gold.iter().zip(predicted) {
            let (g, p) = (g.as_ref(), p.as_ref());
            self.labels.entry(g.to_string()).or_default().num_observation += 1;
            self.labels.entry(p.to_string()).or_default().num_prediction += 1;
            if g == p {
                self.labels.entry(g.to_string()).or_default().num_correct += 1;
                matched += 1;
            }
        }
        self.item_total_num += gold.len();
        self.item_total_correct += matched;
        if matched == gold.len() && gold.len() == predicted.len() {
            self.inst_total_correct += 1;
        }
        self.inst_total_num += 1;
    }

    /// Compute the ratios from the accumulated counts
    pub fn evaluate(&mut self) {
        self.macro_precision = 0.0;
        self.macro_recall = 0.0;
        self.macro_fmeasure = 0.0;
        let mut num_labels = 0;

        for lev in self.labels.values_mut() {
            lev.precision = 0.0;
            lev.recall = 0.0;
            lev.fmeasure = 0.0;
            if lev.num_observation == 0 {
                continue;
            }
            num_labels += 1;

            if lev.num_prediction > 0 {
                lev.precision = lev.num_correct as f64 / lev.num_prediction as f64;
            }
            lev.recall = lev.num_correct as f64 / lev.num_observation as f64;
            if lev.precision + lev.recall > 0.0 {
                lev.fmeasure = lev.precision * lev.recall * 2.0 / (lev.precision + lev.recall);
            }
            self.macro_precision += lev.precision;
            self.macro_recall += lev.recall;
            self.macro_fmeasure += lev.fmeasure;
        }

        if num_labels > 0 {
            self.macro_precision /= num_labels as f64;
            self.macro_recall /= num_labels as f64;
            self.macro_fmeasure /= num_labels as f64;
        }
        if self.item_total_num > 0 {
            self.item_accuracy = self.item_total_correct as f64 / self.item_total_num as f64;
        }
        if self.inst_total_num > 0 {
            self.inst_accuracy = self.inst_total_correct as f64 / self.inst_total_num as f64;
        }
    }

    /// Measures of a single label
    pub fn label(&self, name: &str) -> Option<&LabelMeasure> {
        self.labels.get(name)
    }
}

impl fmt::Display for Evaluation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Performance by label (#match, #model, #ref) (precision, recall, F1):")?;
        for (label, lev) in &self.labels {
            if lev.num_observation == 0 {
                writeln!(
                    f,
                    "    {}: ({}, {}, {}) (******, ******, ******)",
                    label, lev.num_correct, lev.num_prediction, lev.num_observation
                )?;
            } else {
                writeln!(
                    f,
                    "    {}: ({}, {}, {}) ({:.4}, {:.4}, {:.4})",
                    label,
                    lev.num_correct,
                    lev.num_prediction,
                    lev.num_observation,
                    lev.precision,
                    lev.recall,
                    lev.fmeasure
                )?;
            }
        }
        writeln!(
            f,
            "Macro-average precision, recall, F1: ({:.6}, {:.6}, {:.6})",
            self.macro_precision, self.macro_recall, self.macro_fmeasure
        )?;
        writeln!(
            f,
            "Item accuracy: {} / {} ({:.4})",
            self.item_total_correct, self.item_total_num, self.item_accuracy
        )?;
        write!(
            f,
            "Instance accuracy: {} / {} ({:.4})",
            self.inst_total_correct, self.inst_total_num, self.inst_accuracy
        )
    }
}
