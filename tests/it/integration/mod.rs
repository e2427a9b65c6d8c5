//! Full pointer-gesture workflows through the interaction engine.

mod resize_gesture_tests;
