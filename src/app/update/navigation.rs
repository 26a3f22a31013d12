use super::super::state::App;
use super::Effect;
use preview_core::SessionCommand;

impl App {
    pub(super) fn handle_next_page(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::NextPage, effects);
    }

    pub(super) fn handle_previous_page(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::PrevPage, effects);
    }

    pub(super) fn handle_page_input_changed(&mut self, text: String, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::SetPageInput { text }, effects);
    }

    pub(super) fn handle_page_input_submitted(&mut self, effects: &mut Vec<Effect>) {
        self.dispatch_session_command(SessionCommand::SubmitPageInput, effects);
    }
}
