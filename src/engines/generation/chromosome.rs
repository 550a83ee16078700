use crate::types::Gene;

/// Chromosome representation for the maze search
///
/// A chromosome is a fixed-length sequence of genes. Each gene is either a
/// directional attempt (`Gene::Move`) or `Gene::Blocked`, meaning the walk
/// tried an illegal move at that step and the gene was discarded in place.
/// The walk always starts implicitly from the maze's Start cell.
///
/// Linear genes keep the operators trivial:
/// - **Crossover**: a prefix of one parent joined to the suffix of another
/// - **Mutation**: overwrite individual genes in place
///
/// # Example
///
/// ```
/// use mazegen::engines::generation::chromosome::{Chromosome, chromosome_to_string};
/// use mazegen::types::{Gene, Move};
///
/// let chromosome: Chromosome = vec![Gene::Move(Move::Right), Gene::Blocked, Gene::Move(Move::Down)];
/// assert_eq!(chromosome_to_string(&chromosome), "RXD");
/// ```
pub type Chromosome = Vec<Gene>;

/// Ordered collection of chromosomes, replaced wholesale every generation
pub type Population = Vec<Chromosome>;

/// Compact `U/D/L/R/X` rendering
pub fn chromosome_to_string(chromosome: &[Gene]) -> String {
    chromosome.iter().map(|g| g.symbol()).collect()
}

pub fn accepted_moves(chromosome: &[Gene]) -> usize {
    chromosome.iter().filter(|g| !g.is_blocked()).count()
}
