use super::*;
use std::fs;

#[test]
fn reads_prompts_and_answers() {
    let csv = "prompt,answer\nCapital of France?,Paris\nYear of the fall of the Berlin wall?,1989\n";
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).unwrap();
    let questions = definition.get_questions();
    assert_eq!(questions.len(), 2);
    assert_eq!(questions[0].prompt, "Capital of France?");
    assert_eq!(questions[0].answer, "Paris");
    assert_eq!(questions[1].answer, "1989");
}

#[test]
fn numbers_questions_by_row() {
    let csv = "prompt,answer\nQ,A\nQ,A\nQ,B\n";
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).unwrap();
    let ids: Vec<QuestionId> = definition.get_questions().iter().map(|q| q.id).collect();
    assert_eq!(ids, vec![QuestionId(0), QuestionId(1), QuestionId(2)]);
    assert_ne!(definition.get_questions()[0], definition.get_questions()[1]);
}

#[test]
fn accepts_header_aliases() {
    let csv = "問題,答え\n日本の首都は？,東京\n";
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).unwrap();
    assert_eq!(definition.get_questions()[0].prompt, "日本の首都は？");
    assert_eq!(definition.get_questions()[0].answer, "東京");

    let csv = "question,answer\nWho?,Me\n";
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).unwrap();
    assert_eq!(definition.get_questions()[0].prompt, "Who?");
}

#[test]
fn can_configure_column_names() {
    let csv = "id,term,definition\n1,mitochondria,powerhouse of the cell\n";
    let columns = Columns {
        prompt: Some("term".to_owned()),
        answer: Some("definition".to_owned()),
    };
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &columns).unwrap();
    assert_eq!(definition.get_questions()[0].prompt, "mitochondria");
    assert_eq!(definition.get_questions()[0].answer, "powerhouse of the cell");
}

#[test]
fn configured_column_wins_over_default_header() {
    let csv = "prompt,answer,reply\nQ1,note,A1\n";
    let columns = Columns {
        prompt: None,
        answer: Some("reply".to_owned()),
    };
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &columns).unwrap();
    assert_eq!(definition.get_questions()[0].prompt, "Q1");
    assert_eq!(definition.get_questions()[0].answer, "A1");
}

#[test]
fn configured_column_wins_over_alias_header() {
    let csv = "問題,term,答え\n日本の首都は？,capital,東京\n";
    let columns = Columns {
        prompt: Some("term".to_owned()),
        answer: None,
    };
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &columns).unwrap();
    assert_eq!(definition.get_questions()[0].prompt, "capital");
    assert_eq!(definition.get_questions()[0].answer, "東京");
}

#[test]
fn first_matching_header_is_used_when_several_exist() {
    let csv = "問題,prompt,answer\nfirst,second,A\n";
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).unwrap();
    assert_eq!(definition.get_questions()[0].prompt, "first");
    assert_eq!(definition.get_questions()[0].answer, "A");
}

#[test]
fn missing_configured_column_is_an_error() {
    let csv = "prompt,answer\nQ1,A1\n";
    let columns = Columns {
        prompt: None,
        answer: Some("reply".to_owned()),
    };
    assert!(QuizDefinition::from_reader(csv.as_bytes(), &columns).is_err());
}

#[test]
fn trims_fields_and_headers() {
    let csv = "\u{feff}prompt , answer\n  Capital of Italy?  ,  Rome \n";
    let definition = QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).unwrap();
    assert_eq!(definition.get_questions()[0].prompt, "Capital of Italy?");
    assert_eq!(definition.get_questions()[0].answer, "Rome");
}

#[test]
fn rejects_missing_columns() {
    let csv = "prompt,solution\nQ,A\n";
    assert!(QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).is_err());
}

#[test]
fn rejects_empty_quiz() {
    let csv = "prompt,answer\n";
    assert!(QuizDefinition::from_reader(csv.as_bytes(), &Columns::default()).is_err());
}

#[test]
fn opens_file_from_disk() {
    let mut path = std::env::temp_dir();
    path.push(format!("choice-quiz-definition-{}.csv", std::process::id()));
    fs::write(&path, "prompt,answer\nQ1,A1\nQ2,A2\n").unwrap();
    let definition = QuizDefinition::open(&path, &Columns::default());
    fs::remove_file(&path).ok();
    assert_eq!(definition.unwrap().get_questions().len(), 2);
}

#[test]
fn missing_file_is_an_error() {
    let path = Path::new("this/quiz/does/not/exist.csv");
    assert!(QuizDefinition::open(path, &Columns::default()).is_err());
}

#[test]
fn sanitize_ignores_case_accents_and_punctuation() {
    assert_eq!(sanitize("Élysée Palace!"), "elyseepalace");
    assert_eq!(sanitize("  1990 "), "1990");
}
