/// All messages that can be sent through the FLTK channel.
/// Each toolbar/board callback sends one of these; the dispatch loop in
/// main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Mode radios
    SelectLetterMode,
    SelectPictureMode,

    // Customization panel
    ToggleCustomize,
    ImportImage,
    ImportAudio,
    LetterEntry(String),
    AddCustomMedia,

    // Board
    CardPressed(usize),
    NextPage,
    PreviousPage,

    Quit,
}
