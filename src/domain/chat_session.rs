//! Assistant conversation state: transcript, prompt buffer and the pending flag.

use super::{
    chat::{ChatMessage, Transcript},
    input_state::InputBuffer,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatSessionStatus {
    #[default]
    Idle,
    AwaitingReply,
}

/// Why a submit did not start a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitRejected {
    /// Input is empty after trimming.
    EmptyInput,
    /// A reply is still outstanding; only one round trip may be in flight.
    ReplyPending,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ChatSession {
    transcript: Transcript,
    input: InputBuffer,
    status: ChatSessionStatus,
}

impl ChatSession {
    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn input(&self) -> &InputBuffer {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputBuffer {
        &mut self.input
    }

    pub fn status(&self) -> ChatSessionStatus {
        self.status
    }

    pub fn is_awaiting_reply(&self) -> bool {
        self.status == ChatSessionStatus::AwaitingReply
    }

    /// `Idle -> AwaitingReply`. On success the user message is recorded, the
    /// buffer is cleared and the prompt to send is returned.
    pub fn submit(&mut self) -> Result<String, SubmitRejected> {
        if self.input.is_blank() {
            return Err(SubmitRejected::EmptyInput);
        }
        if self.is_awaiting_reply() {
            return Err(SubmitRejected::ReplyPending);
        }

        let prompt = self.input.take();
        self.transcript.push(ChatMessage::user(prompt.clone()));
        self.status = ChatSessionStatus::AwaitingReply;
        Ok(prompt)
    }

    /// `AwaitingReply -> Idle`, recording the assistant reply.
    ///
    /// Returns false (and records nothing) when no reply was expected.
    pub fn complete(&mut self, reply: String) -> bool {
        if !self.is_awaiting_reply() {
            return false;
        }

        self.transcript.push(ChatMessage::assistant(reply));
        self.status = ChatSessionStatus::Idle;
        true
    }
}
