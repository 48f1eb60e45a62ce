use std::process::ExitCode;

use learngl::lessons::LessonKind;

fn main() -> ExitCode {
    learngl::launch(LessonKind::Shaders)
}
