use io_more::charset::{self, Charset};
use io_more_test_harness::prelude::*;



#[test]
pub fn text_survives_encoding_to_file_and_decoding_back() -> TestResult {
    let empty_harness = EmptyTree::initialize();

    let file_path = empty_harness.sub_path("text.txt");
    let charset = Charset::for_name("windows-1250").unwrap();
    let text = "Čez ŽIVO mejo, šest ćevapčičev.";


    let file = std::fs::File::create(&file_path)?;
    let chars_written = charset::copy_from_chars(&mut text.chars(), file, charset).unwrap();
    assert_eq!(chars_written, text.chars().count() as u64);

    // Every char of the text is a single byte in windows-1250.
    assert_eq!(std::fs::metadata(&file_path)?.len(), chars_written);


    let file = std::fs::File::open(&file_path)?;
    let decoded = charset::read_string(file, charset).unwrap();

    assert_eq!(decoded, text);


    empty_harness.destroy();
    Ok(())
}



#[test]
pub fn missing_charset_name_resolves_to_utf8() {
    assert_eq!(Charset::resolve_or_default(None).unwrap(), Charset::utf8());
    assert_eq!(Charset::default().name(), "UTF-8");
}
