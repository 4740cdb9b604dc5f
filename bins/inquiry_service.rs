use server::ServiceKind;

fn main() -> std::process::ExitCode {
    server::launch(ServiceKind::Inquiry)
}
