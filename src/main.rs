use declparse::{errors::errors::Error, parser::parser::parse, token::tokens::Token};

fn main() -> Result<(), Error> {
    // x, y, z: f32, w: f64
    let tokens = vec![
        "x".into(),
        Token::comma(),
        "y".into(),
        Token::comma(),
        "z".into(),
        Token::colon(),
        "f32".into(),
        Token::comma(),
        "w".into(),
        Token::colon(),
        "f64".into(),
    ];

    let nodes = parse(tokens)?;

    for node in nodes {
        println!("{}", node);
    }

    Ok(())
}
