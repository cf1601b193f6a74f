// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC


mod milestones;
