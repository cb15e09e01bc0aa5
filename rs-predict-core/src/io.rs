use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

use regex::Regex;

/// Reads a text file and returns all its lines as a `Vec<String>`.
///
/// - Reads the entire file into memory
/// - Splits on `\n` / `\r\n`
pub(crate) fn read_file<P: AsRef<Path>>(filename: P) -> io::Result<Vec<String>> {
	let mut contents = String::new();
	File::open(filename)?.read_to_string(&mut contents)?;
	Ok(contents.lines().map(str::to_owned).collect())
}

/// Normalizes raw text lines into the word-token stream fed to the model.
///
/// For each whitespace-separated token: lowercase it and keep the leading
/// run of alphanumeric characters, so punctuation is stripped and a word
/// like `don't` normalizes to `don`. Tokens without a leading alphanumeric
/// character are discarded entirely; the result never contains an empty
/// string.
pub(crate) fn tokenize(lines: &[String]) -> Vec<String> {
	let leading_word = Regex::new(r"^[a-z0-9]+").expect("Failed to build regex");

	let mut tokens = Vec::new();
	for line in lines {
		for raw in line.split_whitespace() {
			let lowered = raw.to_lowercase();
			if let Some(m) = leading_word.find(&lowered) {
				tokens.push(m.as_str().to_owned());
			}
		}
	}
	tokens
}
