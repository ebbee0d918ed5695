// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Mirrors of the clinic backend's JSON records.

pub mod appointment;
pub mod auth;
pub mod calendar;
pub mod doctor;
pub mod schedule_slot;
pub mod service;
pub mod shift;

pub use appointment::{
    Appointment, AppointmentInput, AvailableSlot, MonthAppointments, WeekAppointments,
};
pub use auth::{LoginCredentials, RefreshRequest, RefreshResponse, TokenPair};
pub use calendar::{CalendarData, CalendarDay, CalendarShift, CalendarShifts};
pub use doctor::{Doctor, DoctorInput};
pub use schedule_slot::{ScheduleSlot, ScheduleSlotInput};
pub use service::{Service, ServiceInput};
pub use shift::{Shift, ShiftInput, ShiftPatch, ShiftType};
