// Copyright (C) 2026  Caprica Software Limited
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::Result;

use crate::{events::AppEvent, fetch::CatalogClient, tasks::TaskContext};

pub(super) fn fetch_catalog(ctx: &mut TaskContext) -> Result<()> {
    let result = CatalogClient::new(&ctx.config.filters_url, &ctx.config.metadata_url)
        .and_then(|client| client.fetch_catalog());

    let event = match result {
        Ok((songs, vocabulary)) => AppEvent::CatalogLoaded { songs, vocabulary },
        Err(e) => AppEvent::CatalogFailed(e.to_string()),
    };
    ctx.event_tx.send(event)?;

    Ok(())
}
