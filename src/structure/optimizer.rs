// Fri Oct 16 2026 - Alex

use crate::config::Config;
use crate::structure::{Field, HeapPermutations, LayoutCalculator, Size, StructureError, TopK};
use crate::utils::logging::ScopedTimer;
use std::cmp::Reverse;

pub const DEFAULT_TOP_K: usize = 3;
pub const DEFAULT_MAX_BRUTE_FORCE_FIELDS: usize = 10;

/// A field ordering and the size it packs to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    ordering: Vec<Field>,
    size: Size,
}

impl Candidate {
    pub fn new(ordering: Vec<Field>, size: Size) -> Self {
        Self { ordering, size }
    }

    pub fn ordering(&self) -> &[Field] {
        &self.ordering
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn into_ordering(self) -> Vec<Field> {
        self.ordering
    }
}

/// Results of one optimization run over a single struct.
#[derive(Debug, Clone)]
pub struct OptimizationReport {
    pub baseline: Candidate,
    pub greedy: Candidate,
    pub brute_force: Vec<Candidate>,
    pub permutations_evaluated: u64,
}

impl OptimizationReport {
    /// The ordering to write back into the source: the best brute force
    /// candidate when `prefer_best` is set, the greedy one otherwise.
    pub fn write_back_ordering(&self, prefer_best: bool) -> &[Field] {
        match self.brute_force.first() {
            Some(best) if prefer_best => best.ordering(),
            _ => self.greedy.ordering(),
        }
    }

    /// Bytes saved by the best brute force ordering over the original one.
    pub fn savings(&self) -> usize {
        let best = self
            .brute_force
            .first()
            .map(|c| c.size)
            .unwrap_or(self.greedy.size);
        self.baseline.size.as_usize().saturating_sub(best.as_usize())
    }
}

pub struct Optimizer {
    calculator: LayoutCalculator,
    top_k: usize,
    max_brute_force_fields: usize,
}

impl Optimizer {
    pub fn new() -> Self {
        Self {
            calculator: LayoutCalculator::new(),
            top_k: DEFAULT_TOP_K,
            max_brute_force_fields: DEFAULT_MAX_BRUTE_FORCE_FIELDS,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new()
            .with_top_k(config.top_k)
            .with_max_brute_force_fields(config.max_brute_force_fields)
    }

    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    pub fn with_max_brute_force_fields(mut self, limit: usize) -> Self {
        self.max_brute_force_fields = limit;
        self
    }

    pub fn calculator(&self) -> &LayoutCalculator {
        &self.calculator
    }

    pub fn top_k(&self) -> usize {
        self.top_k
    }

    pub fn evaluate(&self, fields: Vec<Field>) -> Candidate {
        let size = self.calculator.compute_size(&fields);
        Candidate::new(fields, size)
    }

    /// Largest fields first. A heuristic, not guaranteed optimal.
    pub fn optimize_greedy(&self, mut fields: Vec<Field>) -> Vec<Field> {
        fields.sort_unstable_by_key(|f| Reverse(f.size()));
        fields
    }

    /// Exhaustive search over all `n!` orderings, keeping the `top_k`
    /// smallest. Always returns exactly `top_k` candidates: when there are
    /// fewer distinct orderings the worst one is repeated. Runtime grows
    /// factorially; inputs above the configured field limit are refused.
    pub fn optimize_brute_force(&self, fields: &[Field]) -> Result<Vec<Candidate>, StructureError> {
        self.brute_force(fields).map(|(candidates, _)| candidates)
    }

    fn brute_force(&self, fields: &[Field]) -> Result<(Vec<Candidate>, u64), StructureError> {
        if fields.len() > self.max_brute_force_fields {
            log::warn!(
                "refusing brute force over {} fields (limit {})",
                fields.len(),
                self.max_brute_force_fields
            );
            return Err(StructureError::TooManyFields {
                count: fields.len(),
                limit: self.max_brute_force_fields,
            });
        }

        let _timer = ScopedTimer::new("brute force");
        let mut permutations = HeapPermutations::new(fields.to_vec());
        let mut best: TopK<Size, Vec<Field>> = TopK::new(self.top_k);
        let mut evaluated = 0u64;

        while let Some(ordering) = permutations.next_permutation() {
            let size = self.calculator.compute_size(ordering);
            evaluated += 1;
            if best.insert_with(size, || ordering.to_vec()) {
                log::trace!("permutation #{} ranked with {} bytes", evaluated, size);
            }
        }

        log::debug!(
            "evaluated {} permutations of {} fields, kept {}",
            evaluated,
            fields.len(),
            best.len()
        );
        let mut candidates: Vec<Candidate> = best
            .into_sorted_vec()
            .into_iter()
            .map(|(size, ordering)| Candidate::new(ordering, size))
            .collect();
        if let Some(worst) = candidates.last().cloned() {
            candidates.resize(self.top_k, worst);
        }
        Ok((candidates, evaluated))
    }

    pub fn run(&self, fields: Vec<Field>) -> Result<OptimizationReport, StructureError> {
        let baseline = self.evaluate(fields.clone());
        log::debug!("baseline layout: {} bytes", baseline.size());

        let greedy = self.evaluate(self.optimize_greedy(fields));
        log::debug!("greedy layout: {} bytes", greedy.size());

        // searched from the greedy ordering, which fixes the tie order
        let (brute_force, permutations_evaluated) = self.brute_force(greedy.ordering())?;
        if let Some(best) = brute_force.first() {
            log::info!(
                "best layout {} bytes (baseline {}, greedy {})",
                best.size(),
                baseline.size(),
                greedy.size()
            );
        }

        Ok(OptimizationReport {
            baseline,
            greedy,
            brute_force,
            permutations_evaluated,
        })
    }
}

impl Default for Optimizer {
    fn default() -> Self {
        Self::new()
    }
}
