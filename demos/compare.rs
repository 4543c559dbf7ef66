//! Compare two clustering runs of the same nine genomes.

use concord::{Comparer, Partition};

const RUN_1: &str = "\
genome\tcluster
g1\tA
g2\tA
g3\tA
g4\tB
g5\tB
g6\tC
g7\tC
g8\tC
g9\tC
";

const RUN_2: &str = "\
genome\tcluster
g1\tk1
g2\tk1
g3\tk1
g4\tk1
g5\tk2
g6\tk3
g7\tk3
g8\tk3
g9\tk3
";

fn main() {
    let run1 = Partition::from_table(RUN_1).unwrap();
    let run2 = Partition::from_table(RUN_2).unwrap();

    println!(
        "run 1: {} clusters over {} genomes",
        run1.len(),
        run1.n_items()
    );
    println!(
        "run 2: {} clusters over {} genomes",
        run2.len(),
        run2.n_items()
    );

    let result = Comparer::new()
        .with_progress(3, |done, total| println!("  scored {done}/{total}"))
        .compare(&run1, &run2)
        .unwrap();

    println!(
        "\nmean similarity: {:.6}, disagreeing cluster slots: {}",
        result.mean_similarity, result.disagreements
    );

    // Typical regression-check policy: identical up to float noise passes.
    if result.mean_similarity > 0.999999 {
        println!("runs agree");
    } else {
        println!("runs differ");
    }
}
