use std::path::PathBuf;

use clap::Parser;
use perceptag::train::{Trainer, DEFAULT_EPOCHS};
use perceptag::{write_predictions, Corpus, Decoding, Evaluation, DEFAULT_OUTPUT_PATH};

/// Train a structured perceptron tagger on FILE and tag a test set with it
#[derive(Debug, Parser)]
#[command(version)]
struct Argv {
    /// raise the log level (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
    /// training corpus, one `token tag` pair per line
    #[arg(long, default_value = "train", value_name = "FILE")]
    train: PathBuf,
    /// development corpus, evaluated after training
    #[arg(long, value_name = "FILE")]
    dev: Option<PathBuf>,
    /// test corpus, tagged and written to the output file
    #[arg(long, default_value = "test", value_name = "FILE")]
    test: PathBuf,
    /// result file with `token gold predicted` lines
    #[arg(short, long, default_value = DEFAULT_OUTPUT_PATH, value_name = "FILE")]
    output: PathBuf,
    /// number of passes over the training corpus
    #[arg(short, long, default_value_t = DEFAULT_EPOCHS)]
    epochs: usize,
    /// shuffle the training corpus before every epoch
    #[arg(long)]
    shuffle: bool,
    /// seed for the shuffle
    #[arg(long)]
    seed: Option<u64>,
    /// decoding strategy: greedy or viterbi
    #[arg(short, long, default_value_t = Decoding::Greedy)]
    decoding: Decoding,
}

fn main() -> perceptag::Result<()> {
    let argv = Argv::parse();
    let level = match argv.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
    log::info!("argv: {:?}", argv);

    let mut trainer = Trainer::new();
    trainer.params_mut().set_epochs(argv.epochs)?;
    trainer.params_mut().set_shuffle(argv.shuffle);
    trainer.params_mut().set_shuffle_seed(argv.seed);
    trainer.params_mut().set_decoding(argv.decoding);
    trainer.extend(Corpus::from_path(&argv.train)?);
    let model = trainer.train()?;
    log::info!("trained {:?}", model);

    let tagger = model.tagger().with_decoding(argv.decoding);

    if let Some(dev) = &argv.dev {
        let corpus = Corpus::from_path(dev)?;
        let mut evaluation = Evaluation::default();
        for sentence in &corpus {
            let predicted = tagger.tag(sentence.tokens())?;
            evaluation.accumulate(sentence.tags(), &predicted);
        }
        evaluation.evaluate();
        println!("{}", evaluation);
    }

    let corpus = Corpus::from_path(&argv.test)?;
    let mut evaluation = write_predictions(&tagger, &corpus, &argv.output)?;
    evaluation.evaluate();
    log::info!(
        "item accuracy on {}: {:.4}",
        argv.test.display(),
        evaluation.item_accuracy
    );
    Ok(())
}
