//! Batch classification and clustering of genotype strings.
//!
//! ```text
//!   feeder --jobs--> worker 0 ┐
//!                    worker 1 ├--results--> collector --> PhenotypeMap
//!                    worker N ┘              (input order)
//! ```
//!
//! Workers parse and classify independently. The collector holds results
//! that arrive early in a reorder buffer and merges them strictly in
//! input order, so phenotype ids match a sequential run exactly.

use std::collections::BTreeMap;
use std::thread;

use polycube_codec::parse;
use tracing::{debug, info};

use crate::classify::{classify, Classification, ClassificationTally, TrialConfig};
use crate::error::TrialError;
use crate::phenotype::{ClusterOutcome, PhenotypeMap};

/// A genotype string the survey could not classify.
#[derive(Clone, Debug, PartialEq)]
pub struct Rejected {
    /// Position in the input list.
    pub index: usize,
    /// The genotype string as given.
    pub genotype: String,
    /// Why it was rejected.
    pub error: TrialError,
}

/// Per-genotype survey result, in input order.
#[derive(Clone, Debug, PartialEq)]
pub struct SurveyEntry {
    /// The genotype string as given.
    pub genotype: String,
    /// Its classification.
    pub classification: Classification,
    /// Where it was clustered, for deterministic genotypes.
    pub cluster: Option<ClusterOutcome>,
}

/// Everything a survey produced.
#[derive(Clone, Debug, Default)]
pub struct SurveyReport {
    /// Verdict counts.
    pub tally: ClassificationTally,
    /// Deterministic genotypes grouped by shape.
    pub phenotypes: PhenotypeMap,
    /// Classified genotypes in input order.
    pub entries: Vec<SurveyEntry>,
    /// Genotypes that failed to parse or assemble.
    pub rejected: Vec<Rejected>,
}

impl SurveyReport {
    fn record(&mut self, index: usize, genotype: &str, result: Result<Classification, TrialError>) {
        let classification = match result {
            Ok(c) => c,
            Err(error) => {
                debug!(index, %genotype, %error, "genotype rejected");
                self.rejected.push(Rejected {
                    index,
                    genotype: genotype.to_owned(),
                    error,
                });
                return;
            }
        };
        self.tally.record(&classification);
        let cluster = classification
            .shape()
            .map(|shape| self.phenotypes.insert(genotype, shape.clone()));
        self.entries.push(SurveyEntry {
            genotype: genotype.to_owned(),
            classification,
            cluster,
        });
    }

    fn log_summary(&self) {
        info!(
            deterministic = self.tally.deterministic,
            non_deterministic = self.tally.non_deterministic,
            unbounded = self.tally.unbounded,
            rejected = self.rejected.len(),
            phenotypes = self.phenotypes.len(),
            "survey complete"
        );
    }
}

/// Parse and classify one genotype string.
pub fn classify_str(genotype: &str, config: &TrialConfig) -> Result<Classification, TrialError> {
    let g = parse(genotype)?;
    classify(&g, config)
}

/// Classify and cluster `genotypes` on the calling thread.
///
/// An invalid `config` fails the whole survey; a bad genotype string is
/// recorded in [`SurveyReport::rejected`] and skipped.
pub fn survey<S: AsRef<str>>(genotypes: &[S], config: &TrialConfig) -> Result<SurveyReport, TrialError> {
    config.validate()?;
    let mut report = SurveyReport::default();
    for (i, g) in genotypes.iter().enumerate() {
        let g = g.as_ref();
        report.record(i, g, classify_str(g, config));
    }
    report.log_summary();
    Ok(report)
}

/// [`survey`] with classification spread over `workers` threads.
///
/// Produces exactly the report [`survey`] would. `workers` is clamped to
/// `[1, genotypes.len()]`.
pub fn survey_parallel<S: AsRef<str> + Sync>(
    genotypes: &[S],
    config: &TrialConfig,
    workers: usize,
) -> Result<SurveyReport, TrialError> {
    config.validate()?;
    let workers = workers.clamp(1, genotypes.len().max(1));
    let mut report = SurveyReport::default();

    let (job_tx, job_rx) = crossbeam_channel::bounded::<usize>(workers * 4);
    let (result_tx, result_rx) =
        crossbeam_channel::bounded::<(usize, Result<Classification, TrialError>)>(workers * 4);

    thread::scope(|scope| {
        scope.spawn(move || {
            for i in 0..genotypes.len() {
                if job_tx.send(i).is_err() {
                    break;
                }
            }
        });

        for _ in 0..workers {
            let job_rx = job_rx.clone();
            let result_tx = result_tx.clone();
            scope.spawn(move || {
                while let Ok(i) = job_rx.recv() {
                    let result = classify_str(genotypes[i].as_ref(), config);
                    if result_tx.send((i, result)).is_err() {
                        break;
                    }
                }
            });
        }
        // Workers hold the remaining senders; the loop below ends once
        // they have all finished.
        drop(result_tx);

        let mut pending = BTreeMap::new();
        let mut next = 0;
        for (i, result) in result_rx.iter() {
            pending.insert(i, result);
            while let Some(result) = pending.remove(&next) {
                report.record(next, genotypes[next].as_ref(), result);
                next += 1;
            }
        }
    });

    report.log_summary();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polycube_test_utils::fixtures;

    #[test]
    fn bad_strings_are_rejected_not_fatal() {
        let input = [fixtures::DIMER_HEX, "xyz", "", fixtures::TRIMER_HEX];
        let report = survey(&input, &TrialConfig::default()).unwrap();
        assert_eq!(report.tally.deterministic, 2);
        assert_eq!(report.entries.len(), 2);
        let bad: Vec<usize> = report.rejected.iter().map(|r| r.index).collect();
        assert_eq!(bad, [1, 2]);
        assert!(matches!(report.rejected[0].error, TrialError::Codec(_)));
    }

    #[test]
    fn invalid_config_fails_the_survey() {
        let cfg = TrialConfig {
            trials: 0,
            ..TrialConfig::default()
        };
        assert!(matches!(
            survey(&[fixtures::DIMER_HEX], &cfg),
            Err(TrialError::NoTrials)
        ));
        assert!(matches!(
            survey_parallel(&[fixtures::DIMER_HEX], &cfg, 2),
            Err(TrialError::NoTrials)
        ));
    }

    #[test]
    fn empty_input_gives_empty_report() {
        let none: [&str; 0] = [];
        let report = survey_parallel(&none, &TrialConfig::default(), 4).unwrap();
        assert_eq!(report.tally.total(), 0);
        assert!(report.phenotypes.is_empty());
    }
}
