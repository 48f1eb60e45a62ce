use std::process::ExitCode;

use learngl::lessons::LessonKind;

fn main() -> ExitCode {
    let config = learngl::load_config();

    let kind = match std::env::args().nth(1) {
        Some(name) => match name.parse::<LessonKind>() {
            Ok(kind) => kind,
            Err(e) => {
                log::error!("{e}");
                return ExitCode::FAILURE;
            }
        },
        None => LessonKind::Transformations,
    };

    learngl::launch_with(kind, &config)
}
