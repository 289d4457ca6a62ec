mod chat;
mod event;
mod notification;
mod participant;
