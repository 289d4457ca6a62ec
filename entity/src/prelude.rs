pub use super::chat_room::Entity as ChatRoom;
pub use super::event::Entity as Event;
pub use super::event_participant::Entity as EventParticipant;
pub use super::message::Entity as Message;
pub use super::notification::Entity as Notification;
pub use super::profile::Entity as Profile;
pub use super::user::Entity as User;
