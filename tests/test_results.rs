use std::fs::File;
use std::io::BufReader;

use perceptag::{read_results, write_predictions, Corpus, ResultWriter, Sentence, Trainer};

#[test]
fn test_result_file_round_trip() {
    let sentences = vec![
        (vec!["The", "dog", "runs"], vec!["DET", "NOUN", "VERB"], vec!["DET", "NOUN", "NOUN"]),
        (vec!["Hello"], vec!["INTJ"], vec!["INTJ"]),
        (vec!["New", "York", "!"], vec!["B-LOC", "I-LOC", "O"], vec!["B-LOC", "O", "O"]),
    ];

    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let mut writer = ResultWriter::new(File::create(temp_file.path()).unwrap());
    for (tokens, gold, predicted) in &sentences {
        writer.write_sentence(tokens, gold, predicted).unwrap();
    }
    writer.into_inner().unwrap();

    let file = BufReader::new(File::open(temp_file.path()).unwrap());
    let parsed = read_results(file).unwrap();
    assert_eq!(parsed.len(), sentences.len());
    for (read, (tokens, gold, predicted)) in parsed.iter().zip(&sentences) {
        assert_eq!(read.len(), tokens.len());
        for (i, item) in read.iter().enumerate() {
            assert_eq!(item.token, tokens[i]);
            assert_eq!(item.gold, gold[i]);
            assert_eq!(item.predicted, predicted[i]);
        }
    }

    // The corpus reader sees the same sentences with gold tags
    let corpus = Corpus::from_path(temp_file.path()).unwrap();
    let expected: Vec<Sentence> = sentences
        .iter()
        .map(|(tokens, gold, _)| Sentence::from_text(&tokens.join(" "), gold).unwrap())
        .collect();
    assert_eq!(corpus, Corpus::from(expected));
}

#[test]
fn test_write_predictions() {
    let data = "The DET\ndog NOUN\n\nA DET\ncat NOUN\n\n";
    let corpus = Corpus::read(data.as_bytes()).unwrap();
    let mut trainer = Trainer::new();
    trainer.extend(corpus.clone());
    let model = trainer.train().unwrap();

    let temp_file = tempfile::NamedTempFile::new().unwrap();
    let mut evaluation = write_predictions(&model.tagger(), &corpus, temp_file.path()).unwrap();
    evaluation.evaluate();
    assert_eq!(evaluation.item_total_num, 4);
    assert_eq!(evaluation.item_accuracy, 1.0);

    let written = std::fs::read_to_string(temp_file.path()).unwrap();
    assert_eq!(written, "The DET DET\ndog NOUN NOUN\n\nA DET DET\ncat NOUN NOUN\n\n");
}
